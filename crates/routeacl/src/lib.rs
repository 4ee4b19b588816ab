//! Top-level facade crate for routeacl.
//!
//! Re-exports the engine and the reference host so users can depend on a single crate.

pub mod core {
    pub use routeacl_core::*;
}

pub mod host {
    pub use routeacl_host::*;
}

pub use routeacl_core::{Acl, AclError, Decision, Host, Policy, Routes, Subjects};
