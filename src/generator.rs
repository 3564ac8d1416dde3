//! Project file generation driver
//!
//! Runs a full generation: project descriptor first, then the compilation
//! database for the code-intelligence configuration, visiting
//! targets -> binaries -> modules in manifest order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{Level, debug, info, warn};

use crate::compile_commands::{
    COMPILATION_DATABASE_FILE, CompilationDatabase, CompileCommandSynthesizer, DatabaseError,
};
use crate::config::GeneratorConfig;
use crate::project::{
    GenerationManifest, PROJECT_DESCRIPTOR_FILE, ProjectDescriptor, ProjectError, ScriptLocator,
    SkippedTarget, TargetResolver,
};

/// Directory next to the project file holding generated editor metadata
pub const PROJECT_METADATA_DIR: &str = ".uemacs";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("No game project given; only game projects can be generated")]
    NoGameProject,

    #[error("Project file has no parent directory: {path}")]
    InvalidProjectFile { path: String },

    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Compilation database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Summary of a successful generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub project_descriptor_path: PathBuf,
    pub compilation_database_path: PathBuf,
    pub targets_written: usize,
    pub skipped_targets: Vec<SkippedTarget>,
    pub database_entries: usize,
    pub generated_at: DateTime<Utc>,
}

/// A project file generator for one editor flavor
pub trait ProjectFileGenerator {
    /// Extension of the generated metadata directory
    fn project_file_extension(&self) -> &str;

    /// Generate all project files described by `manifest`
    fn generate(&self, manifest: &GenerationManifest) -> Result<GenerationReport, GeneratorError>;

    /// Remove generated files from `project_dir`
    fn clean(&self, project_dir: &Path) -> Result<(), GeneratorError>;
}

/// Generates the editor project descriptor and `compile_commands.json`
#[derive(Debug, Clone)]
pub struct EditorProjectGenerator {
    config: GeneratorConfig,
}

impl EditorProjectGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build the compilation database from the intellisense builds of `project_file`
    fn collect_compile_commands(
        &self,
        manifest: &GenerationManifest,
        project_file: &Path,
        working_directory: &str,
    ) -> CompilationDatabase {
        let mut database = CompilationDatabase::new();

        let Some((platform, configuration)) = manifest.intellisense_selection() else {
            warn!("No buildable platform; compilation database will be empty");
            return database;
        };

        let synthesizer = CompileCommandSynthesizer::new(self.config.host_platform.clone());

        for target in &manifest.targets {
            let build = match manifest.resolve(&platform, &configuration, target) {
                Ok(build) => build,
                Err(e) => {
                    debug!("Skipping target for compile commands: {}", e);
                    continue;
                }
            };

            if manifest.build_project_file(build) != Some(project_file) {
                debug!(target = %build.name, "Target belongs to another project");
                continue;
            }

            let compiler = build.compiler();
            for binary in &build.binaries {
                for module in &binary.modules {
                    synthesizer.register_module(&mut database, module, &compiler, working_directory);
                }
            }
        }

        database
    }
}

impl ProjectFileGenerator for EditorProjectGenerator {
    fn project_file_extension(&self) -> &str {
        PROJECT_METADATA_DIR
    }

    fn generate(&self, manifest: &GenerationManifest) -> Result<GenerationReport, GeneratorError> {
        let start = Instant::now();

        let Some(project_file) = manifest.project_file.as_deref() else {
            warn!("Only game projects can be generated. Skipping project generation.");
            return Err(GeneratorError::NoGameProject);
        };
        let project_dir = project_file
            .parent()
            .ok_or_else(|| GeneratorError::InvalidProjectFile {
                path: project_file.to_string_lossy().to_string(),
            })?;

        let scripts =
            ScriptLocator::for_host(&self.config.host_platform, &manifest.engine_directory())?;

        let platforms = manifest.buildable_platforms();
        info!(
            project = %project_file.display(),
            host = %self.config.host_platform,
            platforms = platforms.len(),
            "Generating project files"
        );

        let (descriptor, skipped_targets) =
            ProjectDescriptor::collect(manifest, project_file, &platforms, &scripts);
        let descriptor_path = project_dir
            .join(self.project_file_extension())
            .join(PROJECT_DESCRIPTOR_FILE);
        descriptor.write(&descriptor_path, self.config.compact_project_file)?;
        crate::log_timing!(Level::DEBUG, "project_descriptor", start.elapsed());

        let working_directory = manifest.engine_root.to_string_lossy().to_string();
        let database = self.collect_compile_commands(manifest, project_file, &working_directory);
        let database_path = project_dir.join(COMPILATION_DATABASE_FILE);
        let database_entries = database.flush(&database_path, &working_directory)?;
        crate::log_timing!(Level::DEBUG, "generate", start.elapsed());

        if !skipped_targets.is_empty() {
            warn!(
                skipped = skipped_targets.len(),
                "Some target combinations could not be generated"
            );
        }

        Ok(GenerationReport {
            project_descriptor_path: descriptor_path,
            compilation_database_path: database_path,
            targets_written: descriptor.project.targets.len(),
            skipped_targets,
            database_entries,
            generated_at: Utc::now(),
        })
    }

    fn clean(&self, project_dir: &Path) -> Result<(), GeneratorError> {
        for path in [
            project_dir.join(self.project_file_extension()),
            project_dir.join(COMPILATION_DATABASE_FILE),
        ] {
            if crate::io::remove_if_exists(&path)? {
                info!(path = %path.display(), "Removed generated project file");
            }
        }
        Ok(())
    }
}
