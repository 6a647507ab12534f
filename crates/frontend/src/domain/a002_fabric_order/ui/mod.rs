pub mod list;

pub use list::FabricOrderList;
