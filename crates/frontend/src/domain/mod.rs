pub mod a001_sales_order;
pub mod a002_fabric_order;
pub mod a003_development;
