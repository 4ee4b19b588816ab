//! routeacl host library entry.
//!
//! A reference host for the routeacl engine: strict YAML config, a request
//! context that receives 401/403 denials, and shared state that compiles
//! the configured rules once. Consumed by the `routeacl` binary and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod context;
