//! Presentation vocabulary for the GitOps promotion demo.
//!
//! This crate contains everything the demo web app varies by deployment
//! stage: the `Environment` set with its name resolution (`environment`),
//! the static per-stage visual profiles (`profile`), and the per-request
//! `RenderContext` (`context`). All of it is static data and total
//! functions; nothing here performs I/O or can fail.
//!
/// Deployment environment set and name resolution
pub mod environment;
/// Static visual profiles per environment
pub mod profile;
/// Per-request rendering input
pub mod context;
#[cfg(test)]
mod tests {
    use crate::{context::RenderContext, environment::Environment};

    /// Test unknown names fall back to the dev environment
    #[test]
    fn unknown_names_fall_back_to_dev() {
        for name in ["", "qa", "production", "PROD", "Dev", "local", "prod "] {
            assert_eq!(Environment::from_name(name), Environment::Dev);
        }
    }

    /// Test the three known names resolve to their own stage
    #[test]
    fn known_names_resolve_exactly() {
        assert_eq!(Environment::from_name("dev"), Environment::Dev);
        assert_eq!(Environment::from_name("staging"), Environment::Staging);
        assert_eq!(Environment::from_name("prod"), Environment::Prod);
    }

    /// Test canonical names round-trip through the resolver
    #[test]
    fn canonical_names_round_trip() {
        for env in [Environment::Dev, Environment::Staging, Environment::Prod] {
            assert_eq!(Environment::from_name(env.name()), env);
        }
    }

    /// Test only the production stage reports is_prod
    #[test]
    fn only_prod_is_prod() {
        assert!(Environment::Prod.is_prod());
        assert!(!Environment::Dev.is_prod());
        assert!(!Environment::Staging.is_prod());
    }

    /// Test each profile carries its stage badge label
    #[test]
    fn profiles_carry_stage_badges() {
        assert_eq!(Environment::Dev.profile().display_name, "DEV");
        assert_eq!(Environment::Staging.profile().display_name, "STAGING");
        assert_eq!(Environment::Prod.profile().display_name, "PRODUCTION");
    }

    /// Test only production ships feature highlights
    #[test]
    fn only_prod_ships_feature_highlights() {
        assert!(Environment::Dev.profile().features.is_empty());
        assert!(Environment::Staging.profile().features.is_empty());
        assert_eq!(Environment::Prod.profile().features.len(), 3);
    }

    /// Test context construction resolves the profile and keeps the version
    #[test]
    fn context_resolves_profile_and_keeps_version() {
        let ctx = RenderContext::new("staging", "3.2.1");
        assert_eq!(ctx.environment, Environment::Staging);
        assert_eq!(ctx.profile.bg_color, "#e6f7ff");
        assert_eq!(ctx.version, "3.2.1");

        let fallback = RenderContext::new("does-not-exist", "1.0.0");
        assert_eq!(fallback.environment, Environment::Dev);
        assert_eq!(fallback.profile.display_name, "DEV");
    }
}
