//! Per-request context types.
//!
//! A `RequestContext` is the host side of `Acl::authorize`: it carries the
//! current verb and path, the shared route table, and the reported error.

pub mod request;

pub use request::RequestContext;
