pub mod components;
pub mod data;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod normalize;
pub mod projection;
