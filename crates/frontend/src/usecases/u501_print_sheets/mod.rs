pub mod selection;
pub mod sheets;
pub mod view;

pub use view::PrintSheetsPage;
