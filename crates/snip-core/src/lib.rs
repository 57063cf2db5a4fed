//! Core types and traits for the snip URL shortener.
//!
//! This crate provides the tenant model, the key-value store capability
//! trait, and the key scheme shared by the mapping engine and the
//! HTTP gateway.

pub mod application;
pub mod error;
pub mod keys;
pub mod registry;
pub mod shortcode;
pub mod store;

pub use application::{Application, DEFAULT_CHARACTERS, DEFAULT_MAX_LENGTH};
pub use error::StoreError;
pub use keys::{forward_key, reverse_key};
pub use registry::TenantRegistry;
pub use shortcode::ShortCode;
pub use store::KvStore;
