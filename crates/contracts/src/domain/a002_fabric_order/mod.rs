pub mod record;

pub use record::FabricOrder;
