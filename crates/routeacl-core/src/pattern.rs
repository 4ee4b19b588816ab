//! Path pattern compilation and matching.
//!
//! Pattern syntax:
//! - `*` matches any run of characters, `/` included
//! - `@name` (or a bare `@`) matches exactly one path segment
//!
//! Everything else matches literally. Patterns are anchored at both ends.

use regex::{Regex, RegexBuilder};

use crate::error::{AclError, Result};

/// Compiled path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    regex: Regex,
}

impl PathPattern {
    /// Compile a pattern. `case_insensitive` folds case for both sides.
    pub fn compile(source: &str, case_insensitive: bool) -> Result<Self> {
        let expr = to_regex(source);
        let regex = RegexBuilder::new(&expr)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| AclError::InvalidPattern(format!("{source}: {e}")))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Pattern as registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Translate a path pattern into an anchored regular expression.
fn to_regex(pattern: &str) -> String {
    let escaped = regex::escape(pattern).replace(r"\*", ".*");

    let mut out = String::with_capacity(escaped.len() + 8);
    out.push('^');
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '@' {
            out.push(c);
            continue;
        }
        // token name is cosmetic: swallow it
        while chars
            .peek()
            .is_some_and(|n| n.is_ascii_alphanumeric() || *n == '_')
        {
            chars.next();
        }
        out.push_str("[^/]+");
    }
    out.push('$');
    out
}
