//! Expense record type persisted by the store

use serde::{Deserialize, Serialize};

/// Number of leading date characters forming a month key ("YYYY-MM")
pub const MONTH_KEY_LEN: usize = 7;

/// A single logged expense. Records carry no identifier; position in the
/// list is the only thing telling two equal records apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    /// Amount spent
    pub amount: f64,
    /// Free-text description
    pub description: String,
    /// Free-text category, compared verbatim
    pub category: String,
    /// Date as entered, expected as YYYY-MM-DD but never validated
    pub date: String,
}

impl Expense {
    /// Create a new Expense
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Month bucket for this expense: the first seven characters of the date.
    /// Shorter dates yield the whole (truncated) string.
    pub fn month_key(&self) -> &str {
        match self.date.char_indices().nth(MONTH_KEY_LEN) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }
}
