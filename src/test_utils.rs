//! Test utilities and global setup
//!
//! Provides centralized test logging configuration and manifest fixtures.

/// Test logging utilities
#[cfg(all(test, feature = "test-logging"))]
pub mod logging {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: Once = Once::new();

    /// Initialize test logging globally - safe to call multiple times
    ///
    /// Respects `RUST_LOG`, defaulting to `debug`. Output goes through the test
    /// writer so it is captured per test.
    ///
    /// ```bash
    /// RUST_LOG=projgen=trace cargo test --features test-logging
    /// ```
    pub fn init() {
        INIT.call_once(|| {
            let env_filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

            fmt()
                .with_env_filter(env_filter)
                .with_test_writer()
                .with_target(true)
                .compact()
                .try_init()
                .ok(); // Ignore errors if already initialized by another test
        });
    }
}

/// Manifest fixtures shared by generator tests
#[cfg(test)]
pub mod fixtures {
    use std::path::{Path, PathBuf};

    use crate::compile_commands::{CompileUnitInputs, CompilerDescriptor};
    use crate::platform::CppStandard;
    use crate::project::{
        BinaryType, BuildBinary, BuildTarget, GenerationManifest, IntellisenseSelection,
        PlatformInfo, ProjectTarget, TargetType,
    };

    fn platform(name: &str, available: bool, groups: &[&str]) -> PlatformInfo {
        PlatformInfo {
            name: name.to_string(),
            available,
            groups: groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn module(root: &Path, name: &str, definitions: &[&str], cpp: &[&str], cc: &[&str]) -> CompileUnitInputs {
        let source = root.join("Shooter/Source").join(name);
        CompileUnitInputs {
            name: name.to_string(),
            target_platform: "Linux".to_string(),
            cpp_standard: CppStandard::Cpp17,
            force_include_files: vec![root.join("Shooter/Intermediate/Definitions.h")],
            definitions: definitions.iter().map(|d| d.to_string()).collect(),
            user_include_paths: vec![source.join("Public")],
            system_include_paths: vec![PathBuf::from("/usr/include/c++/v1")],
            cpp_files: cpp.iter().map(|f| source.join(f)).collect(),
            cc_files: cc.iter().map(|f| source.join(f)).collect(),
        }
    }

    fn build(
        name: &str,
        target_type: TargetType,
        configuration: &str,
        full_name: Option<&str>,
        binaries: Vec<BuildBinary>,
    ) -> BuildTarget {
        BuildTarget {
            name: name.to_string(),
            target_type,
            platform: "Linux".to_string(),
            configuration: configuration.to_string(),
            full_name: full_name.map(str::to_string),
            project_file: None,
            compiler: Some(CompilerDescriptor::new("/usr/bin/clang++")),
            binaries,
        }
    }

    /// A game project `Shooter` with an editor target, a game target and a
    /// foreign tool target, laid out under `root`
    ///
    /// - Buildable platforms: Linux only (Win64 is outside the host groups, Android unavailable)
    /// - `Shooter` has no `DebugGame` build
    /// - `Core/A.cpp` is compiled by three modules; the game target registers it last
    pub fn sample_manifest(root: &Path) -> GenerationManifest {
        let ue = root.join("UE");

        let editor_binaries = vec![
            BuildBinary {
                binary_type: BinaryType::Executable,
                output_files: vec![ue.join("Engine/Binaries/Linux/UnrealEditor")],
                modules: vec![module(
                    root,
                    "Core",
                    &["WITH_EDITOR=1"],
                    &["A.cpp", "B.cpp"],
                    &["C.cc"],
                )],
            },
            BuildBinary {
                binary_type: BinaryType::DynamicLinkLibrary,
                output_files: vec![root.join("Shooter/Binaries/Linux/libUnrealEditor-Shooter.so")],
                modules: vec![
                    module(root, "Shooter", &["WITH_EDITOR=1"], &["Shooter.cpp"], &[]),
                    module(root, "Core", &["WITH_EDITOR=1", "SHARED=1"], &["A.cpp"], &[]),
                    module(root, "Empty", &[], &[], &[]),
                ],
            },
        ];

        let game_binaries = vec![BuildBinary {
            binary_type: BinaryType::Executable,
            output_files: vec![root.join("Shooter/Binaries/Linux/Shooter")],
            modules: vec![module(root, "Core", &["WITH_EDITOR=0"], &["A.cpp"], &[])],
        }];

        let mut tool = build(
            "Tool",
            TargetType::Program,
            "Development",
            Some("Tool"),
            vec![BuildBinary {
                binary_type: BinaryType::Executable,
                output_files: vec![root.join("Other/Binaries/Linux/Tool")],
                modules: vec![CompileUnitInputs {
                    name: "Tool".to_string(),
                    cpp_files: vec![root.join("Other/Source/Tool.cpp")],
                    ..Default::default()
                }],
            }],
        );
        tool.project_file = Some(root.join("Other/Other.uproject"));

        GenerationManifest {
            project_file: Some(root.join("Shooter/Shooter.uproject")),
            engine_root: ue,
            engine_directory: None,
            engine_association: "5.1".to_string(),
            platforms: vec![
                platform("Linux", true, &["Unix", "Desktop"]),
                platform("Win64", true, &["Windows", "Desktop"]),
                platform("Android", false, &["Android"]),
            ],
            host_platform_groups: vec!["Unix".to_string(), "Desktop".to_string()],
            configurations: vec!["Development".to_string(), "DebugGame".to_string()],
            targets: ["ShooterEditor", "Shooter", "Tool"]
                .iter()
                .map(|name| ProjectTarget {
                    name: name.to_string(),
                })
                .collect(),
            builds: vec![
                build(
                    "ShooterEditor",
                    TargetType::Editor,
                    "Development",
                    Some("ShooterEditor"),
                    editor_binaries.clone(),
                ),
                build(
                    "ShooterEditor",
                    TargetType::Editor,
                    "DebugGame",
                    None,
                    editor_binaries,
                ),
                build("Shooter", TargetType::Game, "Development", Some("Shooter"), game_binaries),
                tool,
            ],
            intellisense: IntellisenseSelection::default(),
        }
    }
}
