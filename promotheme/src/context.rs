use crate::environment::Environment;
use crate::profile::EnvironmentProfile;

/// Everything the page renderer needs for one request.
///
/// Built per request from the two configured strings and dropped once the
/// response body is produced. Holds the resolved stage, its static visual
/// profile, and the version string displayed verbatim on the page.
pub struct RenderContext {
    /// Resolved deployment stage.
    pub environment: Environment,
    /// Visual profile of the resolved stage.
    pub profile: &'static EnvironmentProfile,
    /// Version string, carried through unchanged.
    pub version: String,
}

impl RenderContext {
    /// Build a context from the configured environment name and version
    ///
    /// # Arguments
    /// * `environment_name` - Configured name; unknown names resolve to dev
    /// * `version` - Version string, displayed verbatim
    pub fn new(environment_name: &str, version: &str) -> Self {
        let environment = Environment::from_name(environment_name);
        Self {
            environment,
            profile: environment.profile(),
            version: version.to_string(),
        }
    }
}
