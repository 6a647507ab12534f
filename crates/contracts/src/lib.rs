pub mod domain;
pub mod shared;
pub mod snapshot;
pub mod system;
