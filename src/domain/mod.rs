pub mod owner;
pub mod view;
