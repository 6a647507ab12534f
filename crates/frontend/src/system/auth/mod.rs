pub mod allow_list;
pub mod api;
pub mod context;
pub mod storage;
