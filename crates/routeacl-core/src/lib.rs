//! routeacl core: route-based access control.
//!
//! Given a verb, a path and an optional set of subjects (roles, users), the
//! engine decides whether access is granted from a default [`Policy`] plus
//! allow/deny rules attached to route patterns and subjects.
//!
//! - [`route`]: route specifier parsing (`GET|POST /path`, `@alias`)
//! - [`pattern`]: path patterns with `*` wildcards and `@token` segments
//! - [`store`]: subject -> verb -> pattern rule storage
//! - [`engine`]: registration and the decision algorithm
//! - [`authorize`]: the host-facing facade that reports 401/403
//!
//! The engine holds no host state. Route tables and request context are
//! passed per call.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed route
//! specifiers degrade into harmless rules; only configuration mistakes
//! (unknown alias, bad config keys) surface as [`AclError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod authorize;
pub mod config;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod policy;
pub mod route;
pub mod store;
pub mod subject;

pub use authorize::Host;
pub use config::AccessConfig;
pub use engine::{Acl, AclOptions, Decision};
pub use error::{AclError, DenyStatus};
/// Shared result type.
pub use error::Result;
pub use policy::Policy;
pub use route::{parse_route, ParsedRoute, RouteTable, Routes, HTTP_VERBS};
pub use subject::{Subjects, ANY_SUBJECT};
