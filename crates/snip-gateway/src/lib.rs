//! HTTP gateway for the snip URL shortener.
//!
//! Thin translation layer between the HTTP surface and the mapping
//! engine: route and query parsing, tenant/key resolution, and the
//! mapping of engine results and errors onto status codes and bodies.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use config::{ConfigError, Configuration};
pub use error::ApiError;
pub use state::AppState;
