//! Generation manifest
//!
//! The host build system resolves targets, binaries, modules and compile
//! environments, then hands them over as a JSON manifest. Everything here is
//! read-only input for the generators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::compile_commands::{CompileUnitInputs, CompilerDescriptor};
use crate::io::normalize_path;
use crate::project::ProjectError;

/// Configuration used for code intelligence when the manifest does not name one
pub const DEFAULT_INTELLISENSE_CONFIGURATION: &str = "Development";

/// Platform group that never qualifies a platform as buildable on its own
const DESKTOP_PLATFORM_GROUP: &str = "Desktop";

/// Kind of a build target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetType {
    #[default]
    Game,
    Editor,
    Client,
    Server,
    Program,
    #[serde(other)]
    Other,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetType::Game => "Game",
            TargetType::Editor => "Editor",
            TargetType::Client => "Client",
            TargetType::Server => "Server",
            TargetType::Program => "Program",
            TargetType::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Kind of a binary produced by a build target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryType {
    Executable,
    DynamicLinkLibrary,
    StaticLibrary,
    Object,
    PrecompiledHeader,
    #[serde(other)]
    Other,
}

/// A target platform known to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub name: String,

    /// Whether the host has an SDK for this platform
    #[serde(default = "default_available")]
    pub available: bool,

    /// Platform groups this platform belongs to
    #[serde(default)]
    pub groups: Vec<String>,
}

fn default_available() -> bool {
    true
}

/// A target declared by the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTarget {
    pub name: String,
}

/// A binary of a resolved build target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildBinary {
    pub binary_type: BinaryType,

    #[serde(default)]
    pub output_files: Vec<PathBuf>,

    /// Compiled modules linked into this binary
    #[serde(default)]
    pub modules: Vec<CompileUnitInputs>,
}

/// A target resolved by the host for one platform and configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildTarget {
    pub name: String,

    #[serde(default)]
    pub target_type: TargetType,

    pub platform: String,

    pub configuration: String,

    /// Receipt name; defaults to `<name>-<platform>-<configuration>`
    #[serde(default)]
    pub full_name: Option<String>,

    /// Project the target belongs to; defaults to the manifest's project file
    #[serde(default)]
    pub project_file: Option<PathBuf>,

    /// Compiler recorded in compile commands; defaults to `clang++`
    #[serde(default)]
    pub compiler: Option<CompilerDescriptor>,

    #[serde(default)]
    pub binaries: Vec<BuildBinary>,
}

impl BuildTarget {
    pub fn full_name(&self) -> String {
        self.full_name
            .clone()
            .unwrap_or_else(|| format!("{}-{}-{}", self.name, self.platform, self.configuration))
    }

    /// First output file of the first executable binary
    pub fn executable(&self) -> Option<&Path> {
        self.binaries
            .iter()
            .find(|binary| binary.binary_type == BinaryType::Executable)
            .and_then(|binary| binary.output_files.first())
            .map(PathBuf::as_path)
    }

    pub fn compiler(&self) -> CompilerDescriptor {
        self.compiler.clone().unwrap_or_default()
    }
}

/// Platform and configuration whose builds feed the compilation database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntellisenseSelection {
    #[serde(default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub configuration: Option<String>,
}

/// Host-resolved inputs for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationManifest {
    /// The game project file; generation requires one
    #[serde(default)]
    pub project_file: Option<PathBuf>,

    /// Engine/repository root, recorded as the working directory of every command
    pub engine_root: PathBuf,

    /// Engine directory; defaults to `<engine_root>/Engine`
    #[serde(default)]
    pub engine_directory: Option<PathBuf>,

    #[serde(default)]
    pub engine_association: String,

    #[serde(default)]
    pub platforms: Vec<PlatformInfo>,

    #[serde(default)]
    pub host_platform_groups: Vec<String>,

    #[serde(default)]
    pub configurations: Vec<String>,

    #[serde(default)]
    pub targets: Vec<ProjectTarget>,

    #[serde(default)]
    pub builds: Vec<BuildTarget>,

    #[serde(default)]
    pub intellisense: IntellisenseSelection,
}

impl GenerationManifest {
    /// Load a manifest and resolve its relative paths against the manifest's directory
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        if !path.exists() {
            return Err(ProjectError::ManifestNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let mut manifest: GenerationManifest =
            serde_json::from_str(&content).map_err(|e| ProjectError::ManifestParse {
                path: path.to_string_lossy().to_string(),
                error: e.to_string(),
            })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        manifest.resolve_paths(base_dir);
        Ok(manifest)
    }

    /// Make every path absolute against `base_dir` and normalize it
    pub fn resolve_paths(&mut self, base_dir: &Path) {
        let resolve = |path: &mut PathBuf| *path = normalize_path(&base_dir.join(&*path));

        if let Some(project_file) = self.project_file.as_mut() {
            resolve(project_file);
        }
        resolve(&mut self.engine_root);
        if let Some(engine_directory) = self.engine_directory.as_mut() {
            resolve(engine_directory);
        }

        for build in &mut self.builds {
            if let Some(project_file) = build.project_file.as_mut() {
                resolve(project_file);
            }
            // A bare program name is looked up on PATH by the consumer
            if let Some(compiler) = build.compiler.as_mut()
                && compiler.path.components().count() > 1
            {
                resolve(&mut compiler.path);
            }

            for binary in &mut build.binaries {
                binary.output_files.iter_mut().for_each(resolve);
                for module in &mut binary.modules {
                    module.force_include_files.iter_mut().for_each(resolve);
                    module.user_include_paths.iter_mut().for_each(resolve);
                    module.system_include_paths.iter_mut().for_each(resolve);
                    module.cpp_files.iter_mut().for_each(resolve);
                    module.cc_files.iter_mut().for_each(resolve);
                }
            }
        }
    }

    pub fn engine_directory(&self) -> PathBuf {
        self.engine_directory
            .clone()
            .unwrap_or_else(|| self.engine_root.join("Engine"))
    }

    /// Project file a build belongs to
    pub fn build_project_file<'a>(&'a self, build: &'a BuildTarget) -> Option<&'a Path> {
        build
            .project_file
            .as_deref()
            .or(self.project_file.as_deref())
    }

    /// Platforms that can be built on this host, in manifest order
    ///
    /// A platform qualifies when it is available and shares a group other than
    /// `Desktop` with the host. Without host groups, availability alone decides.
    pub fn buildable_platforms(&self) -> Vec<&PlatformInfo> {
        self.platforms
            .iter()
            .filter(|platform| platform.available)
            .filter(|platform| {
                self.host_platform_groups.is_empty()
                    || platform.groups.iter().any(|group| {
                        group != DESKTOP_PLATFORM_GROUP && self.host_platform_groups.contains(group)
                    })
            })
            .collect()
    }

    /// Platform and configuration used for the compilation database
    pub fn intellisense_selection(&self) -> Option<(String, String)> {
        let platform = match &self.intellisense.platform {
            Some(platform) => platform.clone(),
            None => self.buildable_platforms().first()?.name.clone(),
        };
        let configuration = self
            .intellisense
            .configuration
            .clone()
            .unwrap_or_else(|| DEFAULT_INTELLISENSE_CONFIGURATION.to_string());

        Some((platform, configuration))
    }
}

/// Resolves a project target for a platform and configuration
///
/// Returns `ProjectError::Unbuildable` when the host could not produce a build
/// for the combination.
pub trait TargetResolver {
    fn resolve(
        &self,
        platform: &str,
        configuration: &str,
        target: &ProjectTarget,
    ) -> Result<&BuildTarget, ProjectError>;
}

impl TargetResolver for GenerationManifest {
    fn resolve(
        &self,
        platform: &str,
        configuration: &str,
        target: &ProjectTarget,
    ) -> Result<&BuildTarget, ProjectError> {
        self.builds
            .iter()
            .find(|build| {
                build.name == target.name
                    && build.platform == platform
                    && build.configuration == configuration
            })
            .ok_or_else(|| ProjectError::Unbuildable {
                target: target.name.clone(),
                platform: platform.to_string(),
                configuration: configuration.to_string(),
            })
    }
}
