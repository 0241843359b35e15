//! LawChat server - chat-driven bill lookup and legal analysis over HTTP.
//!
//! # Architecture
//!
//! - [`routes`]: router construction
//! - [`handlers`]: JSON API endpoints
//! - [`pages`]: HTML views
//! - [`genai`]: generative language client and prompts
//! - [`state`]: dependencies shared by handlers
//! - [`models`]: request and response bodies
//! - [`config`]: server configuration
//! - [`error`]: error types and the JSON error envelope

pub mod config;
pub mod error;
pub mod genai;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError, GenAiError};
pub use routes::router;
pub use state::AppState;
