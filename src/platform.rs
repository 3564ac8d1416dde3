//! Host platform and language standard model
//!
//! The host platform is the OS the generator runs on. It selects flag syntax and
//! build scripts, and is independent of the platform a target is compiled for.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Operating system the generator itself executes on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    Win64,
    Win32,
    Mac,
    Linux,
    /// Any host without dedicated support; carries the raw name for diagnostics
    Other(String),
}

impl HostPlatform {
    /// Detect the host platform from the running process
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" if cfg!(target_pointer_width = "64") => HostPlatform::Win64,
            "windows" => HostPlatform::Win32,
            "macos" => HostPlatform::Mac,
            "linux" => HostPlatform::Linux,
            other => HostPlatform::Other(other.to_string()),
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, HostPlatform::Win64 | HostPlatform::Win32)
    }

    pub fn name(&self) -> &str {
        match self {
            HostPlatform::Win64 => "Win64",
            HostPlatform::Win32 => "Win32",
            HostPlatform::Mac => "Mac",
            HostPlatform::Linux => "Linux",
            HostPlatform::Other(name) => name,
        }
    }
}

impl FromStr for HostPlatform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "win64" => HostPlatform::Win64,
            "win32" => HostPlatform::Win32,
            "mac" => HostPlatform::Mac,
            "linux" => HostPlatform::Linux,
            _ => HostPlatform::Other(s.to_string()),
        })
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for HostPlatform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for HostPlatform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        // Unknown names become `Other`
        let Ok(host) = raw.parse::<HostPlatform>();
        Ok(host)
    }
}

/// C++ language standard requested by a module's compile environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CppStandard {
    Cpp14,
    Cpp17,
    #[default]
    Default,
    Latest,
    /// A value the host knows about but this generator does not
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_hosts_case_insensitive() {
        assert_eq!("Win64".parse::<HostPlatform>().unwrap(), HostPlatform::Win64);
        assert_eq!("win32".parse::<HostPlatform>().unwrap(), HostPlatform::Win32);
        assert_eq!("MAC".parse::<HostPlatform>().unwrap(), HostPlatform::Mac);
        assert_eq!("linux".parse::<HostPlatform>().unwrap(), HostPlatform::Linux);
    }

    #[test]
    fn test_parse_unknown_host_keeps_name() {
        let host: HostPlatform = "FreeBSD".parse().unwrap();
        assert_eq!(host, HostPlatform::Other("FreeBSD".to_string()));
        assert_eq!(host.to_string(), "FreeBSD");
        assert!(!host.is_windows());
    }

    #[test]
    fn test_windows_detection() {
        assert!(HostPlatform::Win64.is_windows());
        assert!(HostPlatform::Win32.is_windows());
        assert!(!HostPlatform::Mac.is_windows());
        assert!(!HostPlatform::Linux.is_windows());
    }

    #[test]
    fn test_current_matches_build_os() {
        let host = HostPlatform::current();
        assert_eq!(host.is_windows(), cfg!(windows));
    }

    #[test]
    fn test_unknown_standard_deserializes() {
        let standard: CppStandard = serde_json::from_str("\"Cpp23\"").unwrap();
        assert_eq!(standard, CppStandard::Unknown);

        let standard: CppStandard = serde_json::from_str("\"Latest\"").unwrap();
        assert_eq!(standard, CppStandard::Latest);
    }

    #[test]
    fn test_host_platform_serde_roundtrip_by_name() {
        let host: HostPlatform = serde_json::from_str("\"Mac\"").unwrap();
        assert_eq!(host, HostPlatform::Mac);
        assert_eq!(serde_json::to_string(&HostPlatform::Linux).unwrap(), "\"Linux\"");
    }
}
