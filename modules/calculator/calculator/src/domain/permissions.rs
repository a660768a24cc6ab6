//! Static permission checker

use calculator_sdk::PermissionChecker;
use tracing::info;

/// Grants an operation iff the principal is on a fixed allow-list.
#[derive(Debug, Clone)]
pub struct StaticPermissionChecker {
    allowed: Vec<String>,
}

impl StaticPermissionChecker {
    #[must_use]
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StaticPermissionChecker {
    fn default() -> Self {
        Self::new(["user1"])
    }
}

impl PermissionChecker for StaticPermissionChecker {
    fn allows(&self, operation: &str, principal: &str) -> bool {
        info!(principal, operation, "checking permissions");
        self.allowed.iter().any(|allowed| allowed == principal)
    }
}
