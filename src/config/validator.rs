//! Config validation: every resource reachable and served on its own prefix.

use crate::config::AppConfig;
use crate::error::ConfigError;
use std::collections::HashSet;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.resources.is_empty() {
        return Err(ConfigError::Validation("at least one resource required".into()));
    }
    let mut prefixes = HashSet::new();
    for r in &config.resources {
        let prefix = r.prefix();
        if r.operations.is_empty() {
            return Err(ConfigError::Validation(format!(
                "resource at '{}' exposes no operations",
                prefix
            )));
        }
        if prefix.is_empty() && config.root_redirect.is_some() {
            return Err(ConfigError::Validation(
                "resource bound at '/' conflicts with root_redirect".into(),
            ));
        }
        if !prefixes.insert(prefix.clone()) {
            return Err(ConfigError::DuplicatePrefix(prefix));
        }
    }
    if config.max_connections == 0 {
        return Err(ConfigError::Validation("max_connections must be positive".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResourceConfig, ResourceKind};

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn duplicate_prefix_after_normalization() {
        let mut config = AppConfig::default();
        let mut things = ResourceConfig::new(ResourceKind::Things);
        things.prefix = Some("/users/".into());
        config.resources.push(things);
        assert!(matches!(validate(&config), Err(ConfigError::DuplicatePrefix(p)) if p == "/users"));
    }

    #[test]
    fn resource_without_operations() {
        let mut config = AppConfig::default();
        config.resources[0].operations.clear();
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn root_resource_needs_redirect_disabled() {
        let mut config = AppConfig::default();
        config.resources[0].prefix = Some("/".into());
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
        config.root_redirect = None;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn no_resources() {
        let mut config = AppConfig::default();
        config.resources.clear();
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }
}
