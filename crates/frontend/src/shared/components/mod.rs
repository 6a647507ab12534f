pub mod filter_panel;
pub mod filter_select;
pub mod pagination_controls;
pub mod stat_card;

pub use filter_panel::{FilterPanel, FilterTag};
pub use filter_select::FilterSelect;
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
