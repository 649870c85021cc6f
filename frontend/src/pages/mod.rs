pub mod about;
pub mod dashboard;
pub mod essentials;

pub use about::AboutPage;
pub use dashboard::DashboardPage;
pub use essentials::EssentialsPage;
