use std::collections::BTreeMap;

use serde::Deserialize;

use routeacl_core::error::{AclError, Result};
use routeacl_core::{AccessConfig, Policy, Routes};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    pub version: u32,

    /// Replaces the default HTTP verb set when present.
    #[serde(default)]
    pub verbs: Option<Vec<String>>,

    /// Named route aliases: name -> concrete path pattern.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    #[serde(default)]
    pub access: AccessConfig,
}

impl HostConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AclError::UnsupportedVersion);
        }
        if let Some(verbs) = &self.verbs {
            if verbs.is_empty() || verbs.iter().any(|v| v.trim().is_empty()) {
                return Err(AclError::Config("verbs must be a non-empty list of verbs".into()));
            }
        }
        for (name, path) in &self.aliases {
            if name.is_empty() || path.trim().is_empty() {
                return Err(AclError::Config(format!(
                    "alias must have a name and a path: {name:?} -> {path:?}"
                )));
            }
        }
        // The engine ignores bad policy values; a config file should not.
        if let Some(p) = &self.access.policy {
            p.parse::<Policy>().map_err(AclError::Config)?;
        }
        Ok(())
    }

    /// Route table described by this config.
    pub fn routes(&self) -> Routes {
        let mut routes = Routes::default();
        if let Some(verbs) = &self.verbs {
            routes = routes.with_verbs(verbs.iter().cloned());
        }
        for (name, path) in &self.aliases {
            routes.register_alias(name.as_str(), path.as_str());
        }
        routes
    }
}
