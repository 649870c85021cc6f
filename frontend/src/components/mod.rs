pub mod charts;
pub mod essentials;
pub mod expenses;
pub mod forms;
pub mod header;
pub mod storage_notice;
pub mod summary;
pub mod tips_panel;

pub use header::{Header, Page};
pub use storage_notice::StorageNoticeBanner;
pub use summary::SpendingSummary;
pub use tips_panel::TipsPanel;
