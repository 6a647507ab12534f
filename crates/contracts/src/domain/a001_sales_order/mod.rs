pub mod record;

pub use record::{SalesOrder, SIZE_LABELS};
