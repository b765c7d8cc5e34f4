//! Static visual profiles, one per deployment environment.
//!
//! Each stage of the promotion pipeline gets its own palette and badge
//! label; production additionally carries the list of feature highlights
//! shipped with the release. Profiles are process-wide constants and are
//! never built or modified at runtime.
//!
use crate::environment::Environment;

/// Visual and content configuration for one deployment environment
pub struct EnvironmentProfile {
    /// Page background color
    pub bg_color: &'static str,
    /// Color of the version line
    pub version_color: &'static str,
    /// Background color of the environment badge
    pub badge_bg_color: &'static str,
    /// Badge label shown on the page
    pub display_name: &'static str,
    /// Feature highlights, rendered in order (production only)
    pub features: &'static [&'static str],
}

/// Profile for the dev environment
pub static DEV: EnvironmentProfile = EnvironmentProfile {
    bg_color: "#f0f8ff",
    version_color: "#3498db",
    badge_bg_color: "#3498db",
    display_name: "DEV",
    features: &[],
};

/// Profile for the staging environment
pub static STAGING: EnvironmentProfile = EnvironmentProfile {
    bg_color: "#e6f7ff",
    version_color: "#2980b9",
    badge_bg_color: "#f39c12",
    display_name: "STAGING",
    features: &[],
};

/// Profile for the production environment
pub static PROD: EnvironmentProfile = EnvironmentProfile {
    bg_color: "#e8f5e9",
    version_color: "#27ae60",
    badge_bg_color: "#2e7d32",
    display_name: "PRODUCTION",
    features: &[
        "✅ Updated visual design",
        "✅ Environment indicator",
        "✅ Version display",
    ],
};

impl Environment {
    /// Look up the static profile for this stage
    pub fn profile(self) -> &'static EnvironmentProfile {
        match self {
            Environment::Dev => &DEV,
            Environment::Staging => &STAGING,
            Environment::Prod => &PROD,
        }
    }
}
