pub mod errors;
pub mod config;
