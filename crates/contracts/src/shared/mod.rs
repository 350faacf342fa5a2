pub mod config;
pub mod pagination;
