// Presentation layer - HTTP gateway
pub mod app_state;
pub mod error_response;
pub mod handlers;
