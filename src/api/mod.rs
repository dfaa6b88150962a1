pub mod handlers;
pub mod state;
pub mod view_response;
