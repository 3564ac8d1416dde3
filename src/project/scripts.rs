use std::path::{Path, PathBuf};

use crate::platform::HostPlatform;
use crate::project::{BuildTarget, ProjectError, TargetType};

/// Build script and shell for the host, resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLocator {
    build_script: PathBuf,
    shell: &'static str,
}

impl ScriptLocator {
    /// Locate the engine build script for `host`
    ///
    /// Fails for hosts without a known build script.
    pub fn for_host(host: &HostPlatform, engine_directory: &Path) -> Result<Self, ProjectError> {
        let batch_files = engine_directory.join("Build").join("BatchFiles");

        let (build_script, shell) = match host {
            HostPlatform::Linux => (batch_files.join("Linux").join("Build.sh"), "bash"),
            HostPlatform::Mac => (batch_files.join("Mac").join("Build.sh"), "bash"),
            HostPlatform::Win64 | HostPlatform::Win32 => (batch_files.join("Build.bat"), "call"),
            HostPlatform::Other(name) => {
                return Err(ProjectError::UnsupportedHostPlatform {
                    platform: name.clone(),
                });
            }
        };

        Ok(Self {
            build_script,
            shell,
        })
    }

    pub fn build_script(&self) -> &Path {
        &self.build_script
    }

    pub fn shell(&self) -> &'static str {
        self.shell
    }

    /// Command that builds `target` through the engine build script
    pub fn build_command(&self, target: &BuildTarget, project_file: &Path) -> String {
        format!(
            "{} \"{}\" {} {} {} -project=\"{}\"",
            self.shell,
            self.build_script.display(),
            target.name,
            target.platform,
            target.configuration,
            project_file.display()
        )
    }

    /// Command that launches `binary`; editor targets also receive the project file
    pub fn run_command(&self, target: &BuildTarget, binary: &Path, project_file: &Path) -> String {
        if target.target_type == TargetType::Editor {
            format!("\"{}\" \"{}\"", binary.display(), project_file.display())
        } else {
            format!("\"{}\"", binary.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_target(target_type: TargetType) -> BuildTarget {
        BuildTarget {
            name: "ShooterEditor".to_string(),
            target_type,
            platform: "Linux".to_string(),
            configuration: "Development".to_string(),
            full_name: None,
            project_file: None,
            compiler: None,
            binaries: Vec::new(),
        }
    }

    #[test]
    fn test_script_table() {
        let engine = Path::new("/ue/Engine");

        let linux = ScriptLocator::for_host(&HostPlatform::Linux, engine).unwrap();
        assert_eq!(
            linux.build_script(),
            Path::new("/ue/Engine/Build/BatchFiles/Linux/Build.sh")
        );
        assert_eq!(linux.shell(), "bash");

        let mac = ScriptLocator::for_host(&HostPlatform::Mac, engine).unwrap();
        assert_eq!(
            mac.build_script(),
            Path::new("/ue/Engine/Build/BatchFiles/Mac/Build.sh")
        );
        assert_eq!(mac.shell(), "bash");

        for host in [HostPlatform::Win64, HostPlatform::Win32] {
            let windows = ScriptLocator::for_host(&host, engine).unwrap();
            assert_eq!(
                windows.build_script(),
                Path::new("/ue/Engine/Build/BatchFiles/Build.bat")
            );
            assert_eq!(windows.shell(), "call");
        }
    }

    #[test]
    fn test_unsupported_host() {
        let host = HostPlatform::Other("Haiku".to_string());
        match ScriptLocator::for_host(&host, Path::new("/ue/Engine")) {
            Err(ProjectError::UnsupportedHostPlatform { platform }) => {
                assert_eq!(platform, "Haiku")
            }
            other => panic!("Expected UnsupportedHostPlatform, got {other:?}"),
        }
    }

    #[test]
    fn test_build_command() {
        let locator = ScriptLocator::for_host(&HostPlatform::Linux, Path::new("/ue/Engine")).unwrap();
        let command = locator.build_command(
            &build_target(TargetType::Editor),
            Path::new("/p/Shooter.uproject"),
        );

        assert_eq!(
            command,
            "bash \"/ue/Engine/Build/BatchFiles/Linux/Build.sh\" ShooterEditor Linux Development \
             -project=\"/p/Shooter.uproject\""
        );
    }

    #[test]
    fn test_run_command_depends_on_target_type() {
        let locator = ScriptLocator::for_host(&HostPlatform::Linux, Path::new("/ue/Engine")).unwrap();
        let binary = Path::new("/ue/Engine/Binaries/Linux/UnrealEditor");
        let project = Path::new("/p/Shooter.uproject");

        assert_eq!(
            locator.run_command(&build_target(TargetType::Editor), binary, project),
            "\"/ue/Engine/Binaries/Linux/UnrealEditor\" \"/p/Shooter.uproject\""
        );
        assert_eq!(
            locator.run_command(&build_target(TargetType::Game), binary, project),
            "\"/ue/Engine/Binaries/Linux/UnrealEditor\""
        );
    }
}
