pub mod owner_handlers;
