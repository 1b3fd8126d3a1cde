use std::env;

use thiserror::Error;

const DEFAULT_PRIVATE_ZONE_DOMAIN: &str = "ecs.internal";

const PRIVATE_ZONE_DOMAIN_ENV: &str = "PRIVATE_ZONE_DOMAIN";
const HOSTED_ZONE_ID_ENV: &str = "HOSTED_ZONE_ID";
const MANAGED_CLUSTER_ENV: &str = "ECS_CLUSTER_NAME";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} must be configured")]
    Missing(&'static str),
}

/// Settings for one deployment of the sync function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Domain of the private hosted zone, without trailing dot.
    pub private_zone_domain: String,
    pub hosted_zone_id: String,
    /// Only events whose `requestParameters.cluster` equals this are handled.
    pub managed_cluster: String,
}

impl Config {
    pub fn new(
        private_zone_domain: impl Into<String>,
        hosted_zone_id: impl Into<String>,
        managed_cluster: impl Into<String>,
    ) -> Self {
        let private_zone_domain = private_zone_domain.into();

        Self {
            private_zone_domain: private_zone_domain.trim_end_matches('.').to_string(),
            hosted_zone_id: hosted_zone_id.into(),
            managed_cluster: managed_cluster.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let private_zone_domain = get(PRIVATE_ZONE_DOMAIN_ENV)
            .unwrap_or_else(|| DEFAULT_PRIVATE_ZONE_DOMAIN.to_string());
        let hosted_zone_id =
            get(HOSTED_ZONE_ID_ENV).ok_or(ConfigError::Missing(HOSTED_ZONE_ID_ENV))?;
        let managed_cluster =
            get(MANAGED_CLUSTER_ENV).ok_or(ConfigError::Missing(MANAGED_CLUSTER_ENV))?;

        Ok(Self::new(private_zone_domain, hosted_zone_id, managed_cluster))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn load_with_default_zone_domain() {
        let config = Config::from_lookup(lookup(&[
            ("HOSTED_ZONE_ID", "Z0123456789"),
            ("ECS_CLUSTER_NAME", "prod"),
        ]))
        .unwrap();

        assert_eq!(config, Config::new("ecs.internal", "Z0123456789", "prod"));
    }

    #[test]
    fn load_trims_values_and_trailing_dot() {
        let config = Config::from_lookup(lookup(&[
            ("PRIVATE_ZONE_DOMAIN", " svc.internal. "),
            ("HOSTED_ZONE_ID", "Z0123456789\n"),
            ("ECS_CLUSTER_NAME", "prod"),
        ]))
        .unwrap();

        assert_eq!(config.private_zone_domain, "svc.internal");
        assert_eq!(config.hosted_zone_id, "Z0123456789");
    }

    #[test]
    fn missing_zone_id() {
        let err = Config::from_lookup(lookup(&[("ECS_CLUSTER_NAME", "prod")])).unwrap_err();

        assert_eq!(err, ConfigError::Missing("HOSTED_ZONE_ID"));
    }

    #[test]
    fn empty_cluster_is_missing() {
        let err = Config::from_lookup(lookup(&[
            ("HOSTED_ZONE_ID", "Z0123456789"),
            ("ECS_CLUSTER_NAME", "  "),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Missing("ECS_CLUSTER_NAME"));
    }
}
