pub mod record;

pub use record::Development;
