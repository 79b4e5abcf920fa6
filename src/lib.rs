//! Role-aware user administration service backed by a mock in-memory
//! directory.
//!
//! The directory store simulates an eventual network-backed API: every
//! operation is asynchronous and pays a configurable round-trip latency.
//! On top of it sit the add/edit form flow (validation plus a debounced
//! email-uniqueness probe), a headless view-model for the administration
//! screen, and an actix-web JSON surface with cookie-session auth.

pub mod auth;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod store;
pub mod viewmodel;
