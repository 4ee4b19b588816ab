//! Route specifier parsing.
//!
//! Accepted forms:
//! - `GET /foo`
//! - `GET|PUT /foo`
//! - `* /foo` (all verbs)
//! - `/foo` (all verbs)
//! - `@alias`, optionally prefixed by verbs, resolved through a [`RouteTable`]
//!
//! Parsing never fails on odd input: a malformed specifier degenerates into
//! a route that simply matches nothing useful. Only an unknown alias is an
//! error, because it is a configuration mistake on the host side.

use std::collections::HashMap;

use crate::error::{AclError, Result};

/// Verbs implied by a specifier without a verb filter.
pub const HTTP_VERBS: [&str; 8] = [
    "GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "CONNECT", "OPTIONS",
];

/// Host-side route knowledge needed to parse specifiers.
pub trait RouteTable {
    /// Canonical "all verbs" set, in host order.
    fn verbs(&self) -> &[String];
    /// Concrete path registered for a named route alias.
    fn alias(&self, name: &str) -> Option<&str>;
}

/// In-memory route table.
#[derive(Debug, Clone)]
pub struct Routes {
    verbs: Vec<String>,
    aliases: HashMap<String, String>,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            verbs: HTTP_VERBS.iter().map(|v| v.to_string()).collect(),
            aliases: HashMap::new(),
        }
    }
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the "all verbs" set.
    pub fn with_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.verbs = verbs.into_iter().map(Into::into).collect();
        self
    }

    /// Register (or replace) a named alias.
    pub fn register_alias(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> &mut Self {
        self.aliases.insert(name.into(), path.into());
        self
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl RouteTable for Routes {
    fn verbs(&self) -> &[String] {
        &self.verbs
    }

    fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }
}

/// Parsed route specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    /// Verbs as written (split on `|`), or the table's full verb set.
    pub verbs: Vec<String>,
    /// Path pattern with aliases already substituted.
    pub path: String,
}

impl ParsedRoute {
    /// Verb used when the route is evaluated as a query.
    pub fn query_verb(&self) -> &str {
        self.verbs.first().map(String::as_str).unwrap_or_default()
    }
}

/// Parse a route specifier into its verbs and path pattern.
pub fn parse_route(spec: &str, routes: &dyn RouteTable) -> Result<ParsedRoute> {
    let spec = spec.trim();

    let (verbs, path) = match spec.split_once(char::is_whitespace) {
        Some((head, rest)) if is_verb_token(head) => (head, rest.trim()),
        _ => ("", spec),
    };

    let path = match path.strip_prefix('@') {
        Some(name) => routes
            .alias(name)
            .ok_or_else(|| AclError::UnknownAlias(name.to_string()))?
            .to_string(),
        None => path.to_string(),
    };

    let verbs = if verbs.is_empty() || verbs == "*" {
        routes.verbs().to_vec()
    } else {
        verbs.split('|').map(str::to_string).collect()
    };

    Ok(ParsedRoute { verbs, path })
}

/// `*`, or barewords joined by `|`.
fn is_verb_token(s: &str) -> bool {
    s == "*" || s.chars().all(|c| c == '|' || c == '_' || c.is_ascii_alphanumeric())
}
