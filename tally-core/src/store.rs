//! JSON file persistence for the expense list.
//!
//! The whole list is rewritten on every save. Writes are not atomic.

use crate::expense::Expense;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "expenses.json";

/// Overwrite `path` with `expenses` as a JSON array.
pub fn save(expenses: &[Expense], path: impl AsRef<Path>) -> Result<()> {
    let p = path.as_ref();
    let json = serde_json::to_string_pretty(expenses).context("serialize expenses")?;
    fs::write(p, json).with_context(|| format!("write {}", p.display()))?;
    log::debug!("saved {} expenses to {}", expenses.len(), p.display());
    Ok(())
}

/// Read the expense list from `path`. A missing file is an empty list.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Expense>> {
    let p = path.as_ref();
    if !p.exists() {
        log::debug!("no store at {}, starting empty", p.display());
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    let expenses: Vec<Expense> =
        serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    log::debug!("loaded {} expenses from {}", expenses.len(), p.display());
    Ok(expenses)
}
