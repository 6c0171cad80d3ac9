//! HTTP JSON API
//!
//! The browser-facing surface of the course engine: course structure,
//! chapter documents, source files, and test runs as JSON endpoints.

pub mod error;
pub mod routes;
pub mod run_gate;
pub mod server;
pub mod types;

pub use routes::AppState;
pub use server::{router, serve, HttpServerConfig};
