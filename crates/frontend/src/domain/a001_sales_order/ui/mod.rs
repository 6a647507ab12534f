pub mod list;

pub use list::SalesOrderList;
