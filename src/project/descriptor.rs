//! Editor project descriptor (`project.json`)
//!
//! Describes the project, every buildable target with its build and run tasks,
//! and where the engine and its build script live.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::io::write_atomic;
use crate::project::{
    BuildTarget, GenerationManifest, PlatformInfo, ProjectError, ScriptLocator, TargetResolver,
};

/// Version of the descriptor format
pub const PROJECT_FILE_FORMAT_VERSION: &str = "1.0";

/// File name of the descriptor inside the project metadata directory
pub const PROJECT_DESCRIPTOR_FILE: &str = "project.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectDescriptor {
    pub version: String,
    pub project: ProjectSection,
    pub engine: EngineSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectSection {
    pub name: String,
    pub file: String,
    /// Keyed by the target's full (receipt) name
    pub targets: BTreeMap<String, TargetSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetSection {
    pub name: String,
    pub configuration: String,
    pub platform: String,
    #[serde(rename = "Type")]
    pub target_type: String,
    pub binary: String,
    pub tasks: TaskSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskSection {
    pub build: String,
    pub run: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineSection {
    pub version: String,
    pub root: String,
    pub scripts: ScriptSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScriptSection {
    pub build: String,
}

/// Combination of platform, configuration and target left out of the descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedTarget {
    pub target: String,
    pub platform: String,
    pub configuration: String,
    pub reason: String,
}

impl ProjectDescriptor {
    /// Collect the descriptor for `project_file`
    ///
    /// Targets are visited platform by platform, then configuration, then
    /// target. Combinations the host could not resolve, and targets without an
    /// executable, are skipped and reported.
    pub fn collect(
        manifest: &GenerationManifest,
        project_file: &Path,
        platforms: &[&PlatformInfo],
        scripts: &ScriptLocator,
    ) -> (Self, Vec<SkippedTarget>) {
        let mut targets = BTreeMap::new();
        let mut skipped = Vec::new();

        for platform in platforms {
            for configuration in &manifest.configurations {
                for target in &manifest.targets {
                    let resolved = manifest
                        .resolve(&platform.name, configuration, target)
                        .and_then(|build| {
                            let section = target_section(manifest, build, project_file, scripts)?;
                            Ok((build.full_name(), section))
                        });

                    match resolved {
                        Ok((full_name, section)) => {
                            targets.insert(full_name, section);
                        }
                        Err(e) => {
                            debug!("Skipping target: {}", e);
                            skipped.push(SkippedTarget {
                                target: target.name.clone(),
                                platform: platform.name.clone(),
                                configuration: configuration.clone(),
                                reason: e.to_string(),
                            });
                        }
                    }
                }
            }
        }

        let name = project_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();

        let descriptor = Self {
            version: PROJECT_FILE_FORMAT_VERSION.to_string(),
            project: ProjectSection {
                name,
                file: project_file.to_string_lossy().to_string(),
                targets,
            },
            engine: EngineSection {
                version: manifest.engine_association.clone(),
                root: manifest.engine_root.to_string_lossy().to_string(),
                scripts: ScriptSection {
                    build: scripts.build_script().to_string_lossy().to_string(),
                },
            },
        };

        (descriptor, skipped)
    }

    /// Render as JSON, indented unless `compact`
    pub fn to_json(&self, compact: bool) -> Result<Vec<u8>, ProjectError> {
        let json = if compact {
            serde_json::to_vec(self)?
        } else {
            serde_json::to_vec_pretty(self)?
        };
        Ok(json)
    }

    pub fn write(&self, path: &Path, compact: bool) -> Result<(), ProjectError> {
        let json = self.to_json(compact)?;
        write_atomic(path, &json).map_err(|source| ProjectError::DescriptorWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn target_section(
    manifest: &GenerationManifest,
    build: &BuildTarget,
    default_project_file: &Path,
    scripts: &ScriptLocator,
) -> Result<TargetSection, ProjectError> {
    let binary = build.executable().ok_or_else(|| {
        warn!(target = %build.name, "Target has no executable binary");
        ProjectError::NoExecutable {
            target: build.full_name(),
        }
    })?;
    let project_file = manifest
        .build_project_file(build)
        .unwrap_or(default_project_file);

    Ok(TargetSection {
        name: build.name.clone(),
        configuration: build.configuration.clone(),
        platform: build.platform.clone(),
        target_type: build.target_type.to_string(),
        binary: binary.to_string_lossy().to_string(),
        tasks: TaskSection {
            build: scripts.build_command(build, project_file),
            run: scripts.run_command(build, binary, project_file),
        },
    })
}
