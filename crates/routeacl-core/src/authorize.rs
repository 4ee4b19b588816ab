//! Request authorization against the host's current request.

use crate::engine::Acl;
use crate::error::DenyStatus;
use crate::route::RouteTable;
use crate::subject::Subjects;

/// Host runtime state visible to [`Acl::authorize`].
pub trait Host: RouteTable {
    /// Current request verb (uppercase token).
    fn verb(&self) -> &str;
    /// Current request path.
    fn path(&self) -> &str;
    /// Report a denial to the host.
    fn error(&mut self, status: DenyStatus);
}

impl Acl {
    /// Authorize the host's current request.
    ///
    /// On denial reports 401 (no subject) or 403 (identified subject) to the
    /// host and returns `false`.
    pub fn authorize<H: Host>(&self, host: &mut H, subjects: impl Into<Subjects>) -> bool {
        self.authorize_with(host, subjects, |_: &str, _: &Subjects| false)
    }

    /// Like [`Acl::authorize`], with a deny handler called as
    /// `on_deny(route, subjects)`. A handler returning `true` has handled the
    /// denial: nothing is reported and the call returns `true`.
    pub fn authorize_with<H, F>(
        &self,
        host: &mut H,
        subjects: impl Into<Subjects>,
        mut on_deny: F,
    ) -> bool
    where
        H: Host,
        F: FnMut(&str, &Subjects) -> bool,
    {
        let subjects = subjects.into();
        if self.decide(host.verb(), host.path(), &subjects).is_granted() {
            return true;
        }

        let route = format!("{} {}", host.verb(), host.path());
        if on_deny(&route, &subjects) {
            tracing::debug!(%route, ?subjects, "acl denial handled");
            return true;
        }

        let status = if subjects.is_empty() {
            DenyStatus::Unauthorized
        } else {
            DenyStatus::Forbidden
        };
        tracing::warn!(%route, ?subjects, status = status.code(), "acl denied");
        host.error(status);
        false
    }
}
