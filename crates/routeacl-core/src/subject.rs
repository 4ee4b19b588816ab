//! Subject specifiers (roles, users) accepted by registration and queries.

use serde::Deserialize;

/// Reserved subject whose rules apply to every subject.
pub const ANY_SUBJECT: &str = "*";

/// One subject string or an explicit list of subjects.
///
/// Registration splits `One` on `,` and trims every piece; queries take
/// `One` verbatim as a single subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Subjects {
    One(String),
    Many(Vec<String>),
}

impl Subjects {
    /// No subject given (unidentified caller).
    pub fn is_empty(&self) -> bool {
        match self {
            Subjects::One(s) => s.is_empty(),
            Subjects::Many(v) => v.is_empty(),
        }
    }

    /// Rule buckets addressed by a registration call. Empty entries, and an
    /// empty list, map to `*`.
    pub(crate) fn for_registration(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Subjects::One(s) => s.split(',').map(str::trim).collect(),
            Subjects::Many(v) if v.is_empty() => vec![ANY_SUBJECT],
            Subjects::Many(v) => v.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(|s| if s.is_empty() { ANY_SUBJECT } else { s })
            .map(str::to_string)
            .collect()
    }

    /// Subjects evaluated by a query, in caller priority order.
    pub(crate) fn for_query(&self) -> Vec<&str> {
        match self {
            Subjects::One(s) => vec![s.as_str()],
            Subjects::Many(v) if v.is_empty() => vec![""],
            Subjects::Many(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for Subjects {
    fn default() -> Self {
        Subjects::One(String::new())
    }
}

impl From<&str> for Subjects {
    fn from(s: &str) -> Self {
        Subjects::One(s.to_string())
    }
}

impl From<String> for Subjects {
    fn from(s: String) -> Self {
        Subjects::One(s)
    }
}

impl From<&String> for Subjects {
    fn from(s: &String) -> Self {
        Subjects::One(s.clone())
    }
}

impl From<Vec<String>> for Subjects {
    fn from(v: Vec<String>) -> Self {
        Subjects::Many(v)
    }
}

impl From<Vec<&str>> for Subjects {
    fn from(v: Vec<&str>) -> Self {
        Subjects::Many(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Subjects {
    fn from(v: &[&str]) -> Self {
        Subjects::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Subjects {
    fn from(v: [&str; N]) -> Self {
        Subjects::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&Subjects> for Subjects {
    fn from(s: &Subjects) -> Self {
        s.clone()
    }
}
