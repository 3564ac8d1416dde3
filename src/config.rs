//! Generator configuration
//!
//! Values come from environment variables and can be overridden from the
//! command line, in that order of precedence (CLI wins).

use std::env;

use crate::platform::HostPlatform;

/// Environment variable overriding host platform detection
pub const HOST_PLATFORM_ENV: &str = "PROJGEN_HOST_PLATFORM";

/// Environment variable selecting compact project descriptor output
pub const COMPACT_PROJECT_ENV: &str = "PROJGEN_COMPACT_PROJECT";

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Host platform; selects flag syntax and build scripts
    pub host_platform: HostPlatform,
    /// Write `project.json` without indentation
    pub compact_project_file: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            host_platform: HostPlatform::current(),
            compact_project_file: false,
        }
    }
}

impl GeneratorConfig {
    /// Create GeneratorConfig from environment variables
    pub fn from_env() -> Self {
        let host_platform = env::var(HOST_PLATFORM_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .map(|value| {
                let Ok(host) = value.parse::<HostPlatform>();
                host
            })
            .unwrap_or_else(HostPlatform::current);

        let compact_project_file = env::var(COMPACT_PROJECT_ENV).unwrap_or_default() == "true";

        Self {
            host_platform,
            compact_project_file,
        }
    }

    /// Override values from CLI arguments
    pub fn with_overrides(mut self, host_platform: Option<HostPlatform>, compact: bool) -> Self {
        if let Some(host_platform) = host_platform {
            self.host_platform = host_platform;
        }
        if compact {
            self.compact_project_file = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_detects_host() {
        let config = GeneratorConfig::default();
        assert_eq!(config.host_platform, HostPlatform::current());
        assert!(!config.compact_project_file);
    }

    #[test]
    fn test_overrides_win() {
        let config = GeneratorConfig::default().with_overrides(Some(HostPlatform::Win64), true);
        assert_eq!(config.host_platform, HostPlatform::Win64);
        assert!(config.compact_project_file);
    }

    #[test]
    fn test_absent_overrides_keep_values() {
        let base = GeneratorConfig {
            host_platform: HostPlatform::Mac,
            compact_project_file: true,
        };
        assert_eq!(base.clone().with_overrides(None, false), base);
    }
}
