//! Configuration for the calculator module.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables overriding the configuration,
/// e.g. `CALCULATOR_PRINCIPAL=user2`.
pub const ENV_PREFIX: &str = "CALCULATOR_";

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Identity the multiply permission check runs for.
    pub principal: String,

    /// Principals granted by the static permission checker.
    pub allowed_principals: Vec<String>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            principal: "user1".to_owned(),
            allowed_principals: vec!["user1".to_owned()],
        }
    }
}

impl CalculatorConfig {
    /// Load configuration: defaults, then the optional YAML file, then
    /// `CALCULATOR_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the given file does not exist or any source
    /// contains invalid or unknown keys.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            anyhow::ensure!(
                path.is_file(),
                "calculator config file not found: {}",
                path.display()
            );
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).only(&["principal", "allowed_principals"]))
            .extract()
            .context("invalid calculator configuration")?;

        tracing::debug!(
            principal = %config.principal,
            allowed = config.allowed_principals.len(),
            "calculator configuration loaded"
        );
        Ok(config)
    }
}
