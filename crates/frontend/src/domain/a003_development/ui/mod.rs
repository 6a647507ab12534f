pub mod list;

pub use list::DevelopmentList;
