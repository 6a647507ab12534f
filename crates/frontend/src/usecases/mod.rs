pub mod u501_print_sheets;

pub use u501_print_sheets::PrintSheetsPage;
