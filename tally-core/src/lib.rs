//! tally-core: expense records, JSON persistence, and monthly/category aggregation

pub mod expense;
pub mod store;
pub mod summary;

pub use expense::Expense;
pub use store::{load, save, DEFAULT_STORE_FILE};
pub use summary::{category_summary, monthly_summary, Summary};
