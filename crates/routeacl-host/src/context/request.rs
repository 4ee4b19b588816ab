use std::sync::Arc;

use routeacl_core::{DenyStatus, Host, RouteTable, Routes};

/// Current request as seen by the access-control engine.
#[derive(Debug, Clone)]
pub struct RequestContext {
    verb: String,
    path: String,
    routes: Arc<Routes>,
    error: Option<DenyStatus>,
}

impl RequestContext {
    pub fn new(verb: impl Into<String>, path: impl Into<String>, routes: Arc<Routes>) -> Self {
        Self {
            verb: verb.into(),
            path: path.into(),
            routes,
            error: None,
        }
    }

    /// Last denial reported for this request, if any.
    pub fn denial(&self) -> Option<DenyStatus> {
        self.error
    }

    /// HTTP status of the last reported denial.
    pub fn error_code(&self) -> Option<u16> {
        self.error.map(DenyStatus::code)
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// `"VERB /path"`, the route string handed to deny handlers.
    pub fn route(&self) -> String {
        format!("{} {}", self.verb, self.path)
    }
}

impl RouteTable for RequestContext {
    fn verbs(&self) -> &[String] {
        self.routes.verbs()
    }

    fn alias(&self, name: &str) -> Option<&str> {
        RouteTable::alias(self.routes.as_ref(), name)
    }
}

impl Host for RequestContext {
    fn verb(&self) -> &str {
        &self.verb
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn error(&mut self, status: DenyStatus) {
        tracing::debug!(route = %self.route(), status = status.code(), "request denied");
        self.error = Some(status);
    }
}
