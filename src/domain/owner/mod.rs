pub mod model;
pub mod repository;
pub mod validation;
pub mod workflow;
