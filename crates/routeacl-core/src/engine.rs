//! The access-control engine: registration and decisions.

use std::sync::Arc;

use crate::error::Result;
use crate::pattern::PathPattern;
use crate::policy::Policy;
use crate::route::{parse_route, RouteTable};
use crate::store::{Rule, RuleStore};
use crate::subject::Subjects;

/// Engine-wide matching options, fixed at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct AclOptions {
    /// Fold case when matching paths. Pattern keys are stored lowercased.
    pub case_insensitive: bool,
}

/// Outcome of a query for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// A rule matched.
    Matched {
        subject: String,
        pattern: String,
        accept: bool,
    },
    /// Nothing matched; the default policy applied.
    Default { policy: Policy },
}

impl Decision {
    pub fn is_granted(&self) -> bool {
        match self {
            Decision::Matched { accept, .. } => *accept,
            Decision::Default { policy } => policy.is_allow(),
        }
    }
}

/// Route-based access-control list.
///
/// Registration methods return `&mut Self` so calls can be chained:
///
/// ```
/// use routeacl_core::{Acl, Routes};
///
/// let routes = Routes::default();
/// let mut acl = Acl::new();
/// acl.deny(&routes, "/admin*", "")?
///     .allow(&routes, "/admin*", "admin")?;
///
/// assert!(!acl.granted(&routes, "GET /admin", "")?);
/// assert!(acl.granted(&routes, "GET /admin", "admin")?);
/// # Ok::<(), routeacl_core::AclError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Acl {
    policy: Policy,
    options: AclOptions,
    rules: RuleStore,
}

impl Acl {
    /// Empty engine with an `allow` default policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AclOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> AclOptions {
        self.options
    }

    /// Register `accept` for every (subject, verb) pair the call names.
    pub fn rule(
        &mut self,
        routes: &dyn RouteTable,
        accept: bool,
        route: &str,
        subjects: impl Into<Subjects>,
    ) -> Result<&mut Self> {
        let parsed = parse_route(route, routes)?;
        let path = if self.options.case_insensitive {
            parsed.path.to_lowercase()
        } else {
            parsed.path
        };
        let pattern = Arc::new(PathPattern::compile(&path, self.options.case_insensitive)?);

        let subjects = subjects.into().for_registration();
        tracing::debug!(
            accept,
            pattern = %path,
            verbs = ?parsed.verbs,
            subjects = ?subjects,
            "acl rule registered"
        );

        for subject in &subjects {
            for verb in &parsed.verbs {
                self.rules.insert(Rule {
                    subject: subject.clone(),
                    verb: verb.clone(),
                    pattern: Arc::clone(&pattern),
                    accept,
                });
            }
        }
        Ok(self)
    }

    pub fn allow(
        &mut self,
        routes: &dyn RouteTable,
        route: &str,
        subjects: impl Into<Subjects>,
    ) -> Result<&mut Self> {
        self.rule(routes, true, route, subjects)
    }

    pub fn deny(
        &mut self,
        routes: &dyn RouteTable,
        route: &str,
        subjects: impl Into<Subjects>,
    ) -> Result<&mut Self> {
        self.rule(routes, false, route, subjects)
    }

    /// Current default policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Set the default policy (`allow`/`deny`, any case).
    ///
    /// Any other value is ignored and the current policy is kept.
    pub fn set_policy(&mut self, value: &str) -> &mut Self {
        match value.parse::<Policy>() {
            Ok(policy) => self.policy = policy,
            Err(e) => tracing::debug!(error = %e, current = %self.policy, "policy unchanged"),
        }
        self
    }

    /// True if one of `subjects` may access `route`.
    pub fn granted(
        &self,
        routes: &dyn RouteTable,
        route: &str,
        subjects: impl Into<Subjects>,
    ) -> Result<bool> {
        Ok(self.check(routes, route, subjects)?.is_granted())
    }

    /// Like [`Acl::granted`], but reports the deciding rule.
    ///
    /// Only the first verb of `route` is evaluated. Subjects are tried in
    /// order and the first granted one wins; when none is granted, the
    /// decision for the first subject is returned.
    pub fn check(
        &self,
        routes: &dyn RouteTable,
        route: &str,
        subjects: impl Into<Subjects>,
    ) -> Result<Decision> {
        let parsed = parse_route(route, routes)?;
        Ok(self.decide(parsed.query_verb(), &parsed.path, &subjects.into()))
    }

    /// Evaluate a concrete verb and path.
    pub fn decide(&self, verb: &str, path: &str, subjects: &Subjects) -> Decision {
        let mut first = None;
        for subject in subjects.for_query() {
            let decision = self.decide_for(verb, path, subject);
            if decision.is_granted() {
                return decision;
            }
            if first.is_none() {
                first = Some(decision);
            }
        }
        first.unwrap_or(Decision::Default {
            policy: self.policy,
        })
    }

    fn decide_for(&self, verb: &str, path: &str, subject: &str) -> Decision {
        for rule in self.rules.candidates(subject, verb) {
            tracing::trace!(subject, verb, pattern = rule.pattern.as_str(), "try");
            if rule.pattern.is_match(path) {
                tracing::debug!(
                    subject,
                    verb,
                    path,
                    pattern = rule.pattern.as_str(),
                    accept = rule.accept,
                    "acl rule matched"
                );
                return Decision::Matched {
                    subject: rule.subject.clone(),
                    pattern: rule.pattern.as_str().to_string(),
                    accept: rule.accept,
                };
            }
        }
        Decision::Default {
            policy: self.policy,
        }
    }

    /// Number of stored (subject, verb, pattern) entries.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Subjects that have rules, `*` included.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.rules.subjects()
    }
}
