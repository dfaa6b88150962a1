pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod routes;
pub mod utils;
