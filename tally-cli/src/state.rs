use anyhow::Result;
use std::path::{Path, PathBuf};
use tally_core::{store, Expense};

/// `$HOME/.tally`, or `None` when `HOME` is not set.
pub fn tally_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".tally"))
}

/// Session state: the expense list and where it lives on disk.
#[derive(Debug)]
pub struct AppState {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl AppState {
    /// Load the store at `path`; a missing file starts an empty session.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let expenses = store::load(&path)?;
        Ok(Self { path, expenses })
    }

    /// Append one expense and write the whole list back immediately.
    pub fn add(&mut self, expense: Expense) -> Result<()> {
        self.expenses.push(expense);
        store::save(&self.expenses, &self.path)?;
        log::info!(
            "saved expense #{} to {}",
            self.expenses.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
