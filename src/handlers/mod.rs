pub mod auth_handlers;
pub mod role_handlers;
pub mod user_handlers;
