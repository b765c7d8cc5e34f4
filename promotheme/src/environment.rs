//! Deployment environment vocabulary for the promotion demo.
//!
//! Provides `Environment`, the closed set of stages the demo artifact is
//! promoted through. Name resolution is total: matching is exact and
//! case-sensitive, and any name outside the known set resolves to `Dev`.
//!
/// Deployment stages the demo artifact is promoted through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Development, also the fallback for unknown names
    Dev,
    /// Pre-production staging
    Staging,
    /// Production
    Prod,
}

impl Environment {
    /// Resolve an environment name to a known stage
    ///
    /// Never fails; names outside {"dev", "staging", "prod"} resolve
    /// to `Dev`.
    ///
    /// # Arguments
    /// * `name` - Environment name as configured (e.g. `APP_ENVIRONMENT`)
    pub fn from_name(name: &str) -> Self {
        match name {
            "dev" => Environment::Dev,
            "staging" => Environment::Staging,
            "prod" => Environment::Prod,
            _ => Environment::Dev,
        }
    }

    /// Canonical lowercase name of this stage
    pub fn name(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }

    /// Whether this is the production stage, which renders extra emphasis
    pub fn is_prod(self) -> bool {
        matches!(self, Environment::Prod)
    }
}
