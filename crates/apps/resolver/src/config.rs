use std::env;
use std::path::PathBuf;

use crate::error::ResolveError;

pub const DEFAULT_ORG: &str = "src-d";
/// `members.json` next to the resolver crate, independent of the working
/// directory. Relative `MEMBERS_OUTPUT` values resolve against the working
/// directory as usual.
pub const DEFAULT_OUTPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/members.json");
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Resolver settings, read once from the environment.
#[derive(Clone)]
pub struct ResolverConfig {
    pub github_token: String,
    pub gmap_key: String,
    pub org: String,
    pub output: PathBuf,
    pub graphql_url: String,
    pub geocode_url: String,
}

impl std::fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("github_token", &"<redacted>")
            .field("gmap_key", &"<redacted>")
            .field("org", &self.org)
            .field("output", &self.output)
            .field("graphql_url", &self.graphql_url)
            .field("geocode_url", &self.geocode_url)
            .finish()
    }
}

impl ResolverConfig {
    pub fn from_env() -> Result<Self, ResolveError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable lookup; `from_env` passes the process environment.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ResolveError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ResolveError::Config(format!("{key} is not set")))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            github_token: required("GITHUB_TOKEN")?,
            gmap_key: required("GMAP_KEY")?,
            org: optional("MEMBERS_ORG", DEFAULT_ORG),
            output: PathBuf::from(optional("MEMBERS_OUTPUT", DEFAULT_OUTPUT)),
            graphql_url: optional("GITHUB_GRAPHQL_URL", DEFAULT_GRAPHQL_URL),
            geocode_url: optional("GEOCODE_URL", DEFAULT_GEOCODE_URL),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_GEOCODE_URL, DEFAULT_GRAPHQL_URL, DEFAULT_OUTPUT, ResolverConfig};
    use crate::error::ResolveError;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_only_credentials_are_set() {
        let env = vars(&[("GITHUB_TOKEN", "gh"), ("GMAP_KEY", "gm")]);
        let config = ResolverConfig::from_vars(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.github_token, "gh");
        assert_eq!(config.gmap_key, "gm");
        assert_eq!(config.org, "src-d");
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.graphql_url, DEFAULT_GRAPHQL_URL);
        assert_eq!(config.geocode_url, DEFAULT_GEOCODE_URL);
    }

    #[test]
    fn default_output_does_not_depend_on_working_directory() {
        let output = PathBuf::from(DEFAULT_OUTPUT);
        assert!(output.is_absolute());
        assert!(output.ends_with("members.json"));
        assert_eq!(output.parent(), Some(Path::new(env!("CARGO_MANIFEST_DIR"))));
    }

    #[test]
    fn overrides_are_honoured() {
        let env = vars(&[
            ("GITHUB_TOKEN", "gh"),
            ("GMAP_KEY", "gm"),
            ("MEMBERS_ORG", "acme"),
            ("MEMBERS_OUTPUT", "/tmp/out.json"),
        ]);
        let config = ResolverConfig::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.org, "acme");
        assert_eq!(config.output, PathBuf::from("/tmp/out.json"));
    }

    #[test]
    fn missing_or_blank_credentials_fail() {
        let env = vars(&[("GITHUB_TOKEN", "gh")]);
        let err = ResolverConfig::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert_eq!(err, ResolveError::Config("GMAP_KEY is not set".to_string()));

        let env = vars(&[("GITHUB_TOKEN", "  "), ("GMAP_KEY", "gm")]);
        let err = ResolverConfig::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert_eq!(err, ResolveError::Config("GITHUB_TOKEN is not set".to_string()));
    }

    #[test]
    fn debug_output_hides_credentials() {
        let env = vars(&[("GITHUB_TOKEN", "secret-gh"), ("GMAP_KEY", "secret-gm")]);
        let config = ResolverConfig::from_vars(|k| env.get(k).cloned()).unwrap();
        let shown = format!("{config:?}");
        assert!(!shown.contains("secret"));
    }
}
