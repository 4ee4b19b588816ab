//! Bulk engine configuration.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::engine::{Acl, AclOptions};
use crate::error::{AclError, Result};
use crate::route::RouteTable;
use crate::subject::Subjects;

/// Construction-time configuration: default policy and prefixed rules.
///
/// Rule keys read `"ALLOW <route>"` or `"DENY <route>"` (prefix in any case)
/// and map to a subject specifier; `null` means every subject. Rules apply
/// in mapping order. A key with neither prefix is rejected by
/// [`Acl::from_config`] instead of being skipped, and an invalid `policy`
/// keeps the default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessConfig {
    #[serde(default)]
    pub policy: Option<String>,

    #[serde(default)]
    pub case_insensitive: bool,

    #[serde(default, deserialize_with = "ordered_rules")]
    pub rules: Vec<(String, Subjects)>,
}

impl Acl {
    /// Build an engine from bulk configuration.
    pub fn from_config(cfg: &AccessConfig, routes: &dyn RouteTable) -> Result<Self> {
        let mut acl = Acl::with_options(AclOptions {
            case_insensitive: cfg.case_insensitive,
        });
        if let Some(policy) = &cfg.policy {
            acl.set_policy(policy);
        }
        for (key, subjects) in &cfg.rules {
            let (accept, route) = split_rule_key(key)?;
            acl.rule(routes, accept, route, subjects)?;
        }
        Ok(acl)
    }
}

/// Split `"ALLOW GET /foo"` into `(true, " GET /foo")`.
fn split_rule_key(key: &str) -> Result<(bool, &str)> {
    for (prefix, accept) in [("deny", false), ("allow", true)] {
        if let Some(head) = key.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return Ok((accept, &key[prefix.len()..]));
            }
        }
    }
    Err(AclError::Config(format!("rule key must start with ALLOW or DENY: {key}")))
}

fn ordered_rules<'de, D>(de: D) -> std::result::Result<Vec<(String, Subjects)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RulesVisitor;

    impl<'de> Visitor<'de> for RulesVisitor {
        type Value = Vec<(String, Subjects)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a mapping of \"ALLOW|DENY <route>\" to subjects")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            // a null subject is the empty subject, i.e. `*`
            while let Some((key, subjects)) = map.next_entry::<String, Option<Subjects>>()? {
                out.push((key, subjects.unwrap_or_default()));
            }
            Ok(out)
        }
    }

    de.deserialize_map(RulesVisitor)
}
