pub mod config;
pub mod date_utils;
pub mod logging;
pub mod storage;
pub mod tips;

pub use date_utils::DateUtils;
pub use logging::Logger;
pub use storage::BrowserStorage;
pub use tips::GlooTransport;
