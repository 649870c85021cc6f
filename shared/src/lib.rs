//! Domain core for the family budget tracker.
//!
//! Everything here is platform neutral: the browser frontend plugs in its
//! own storage and HTTP implementations through [`KeyValueStore`] and
//! [`ChatTransport`], and the tests use [`MemoryStore`] and fake transports.

pub mod aggregates;
pub mod charts;
pub mod config;
pub mod error;
pub mod essentials;
pub mod format;
pub mod ids;
pub mod ledger;
pub mod models;
pub mod storage;
pub mod tips;
pub mod validation;

pub use aggregates::{category_totals, grand_total, monthly_totals, CategoryTotals, MonthKey, MonthlyTotals};
pub use config::{AppConfig, TipsConfig};
pub use error::{PersistenceError, TipsError};
pub use essentials::EssentialsStore;
pub use ids::{Clock, FixedClock, IdGenerator, SystemClock};
pub use ledger::LedgerStore;
pub use models::{
    Category, CustomLabel, EssentialItem, EssentialsCounts, EssentialsFilter, Expense, ExpenseDraft, ExpensePatch, RecordId,
};
pub use rust_decimal::Decimal;
pub use storage::{KeyValueStore, MemoryStore, StorageNotice};
pub use tips::{ChatTransport, HttpReply, RequestGate, RequestTicket, TipRequester};
pub use validation::ValidationError;
