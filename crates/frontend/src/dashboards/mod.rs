pub mod d400_production_summary;

pub use d400_production_summary::ui::ProductionSummaryDashboard;
