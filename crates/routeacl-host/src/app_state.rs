//! Shared application state for a routeacl host.
//!
//! The engine is compiled once from config and shared read-only; each
//! request gets its own `RequestContext`.

use std::sync::Arc;

use routeacl_core::error::Result;
use routeacl_core::{Acl, Decision, Routes, Subjects};

use crate::config::HostConfig;
use crate::context::RequestContext;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: HostConfig,
    routes: Arc<Routes>,
    acl: Acl,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: HostConfig) -> Result<Self> {
        let routes = cfg.routes();
        let acl = Acl::from_config(&cfg.access, &routes)?;

        tracing::info!(
            policy = %acl.policy(),
            rules = acl.len(),
            aliases = routes.aliases().count(),
            "acl compiled"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                routes: Arc::new(routes),
                acl,
            }),
        })
    }

    pub fn cfg(&self) -> &HostConfig {
        &self.inner.cfg
    }

    pub fn acl(&self) -> &Acl {
        &self.inner.acl
    }

    pub fn routes(&self) -> Arc<Routes> {
        Arc::clone(&self.inner.routes)
    }

    /// Context for an incoming request.
    pub fn request(&self, verb: &str, path: &str) -> RequestContext {
        RequestContext::new(verb, path, self.routes())
    }

    /// Evaluate a route specifier (`"GET /path"`, `"@alias"`) for `subjects`.
    pub fn check(&self, route: &str, subjects: impl Into<Subjects>) -> Result<Decision> {
        self.inner.acl.check(self.inner.routes.as_ref(), route, subjects)
    }
}
