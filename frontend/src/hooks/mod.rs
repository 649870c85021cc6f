pub mod use_essentials;
pub mod use_ledger;
pub mod use_tips;

pub use use_essentials::{use_essentials, EssentialsActions, EssentialsState};
pub use use_ledger::{use_ledger, LedgerActions, LedgerState};
pub use use_tips::{use_tips, TipsActions, TipsState};
