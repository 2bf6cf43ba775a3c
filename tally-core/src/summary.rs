//! Aggregators: reduce a list of expenses into per-key totals.
//!
//! Keys keep the order in which they were first seen. Nothing is sorted.

use crate::expense::Expense;
use std::collections::HashMap;
use std::fmt;

/// Keyed totals in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the total for `key`, inserting the key at the end if unseen.
    pub fn add(&mut self, key: &str, amount: f64) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every per-key total
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    /// Render as `<key>: $<amount>` lines, amounts to two decimals.
    pub fn lines(&self) -> Vec<String> {
        self.iter()
            .map(|(key, total)| format!("{}: ${:.2}", key, total))
            .collect()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn summarize<'a, F>(expenses: &'a [Expense], key: F) -> Summary
where
    F: Fn(&'a Expense) -> &'a str,
{
    let mut summary = Summary::new();
    for e in expenses {
        summary.add(key(e), e.amount);
    }
    summary
}

/// Totals per month, keyed by the first seven characters of each date.
pub fn monthly_summary(expenses: &[Expense]) -> Summary {
    summarize(expenses, Expense::month_key)
}

/// Totals per category, keyed by the category string verbatim.
pub fn category_summary(expenses: &[Expense]) -> Summary {
    summarize(expenses, |e| e.category.as_str())
}
