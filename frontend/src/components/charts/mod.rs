pub mod monthly_trend;
pub mod spending_pie;

pub use monthly_trend::MonthlyTrend;
pub use spending_pie::SpendingPie;
