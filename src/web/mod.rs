//! Web API module for LetterBox.
//!
//! This module provides the REST API: registration and login, letter
//! CRUD with per-request visibility checks, the public feed, and the
//! AI writing endpoints.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
