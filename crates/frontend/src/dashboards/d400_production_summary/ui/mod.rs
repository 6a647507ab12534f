pub mod dashboard;

pub use dashboard::ProductionSummaryDashboard;
