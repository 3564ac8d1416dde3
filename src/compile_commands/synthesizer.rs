use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::compile_commands::{CompilationDatabase, CompileCommandEntry, SourceFile};
use crate::flags::{FlagTemplates, extra_flags, standard_flag};
use crate::platform::{CppStandard, HostPlatform};

/// Compiler recorded when the host does not supply one
pub const DEFAULT_COMPILER: &str = "clang++";

/// Resolved compile environment of one module
///
/// Supplied by the host build system and never modified here. Sequence order is
/// significant and is reproduced verbatim in the generated command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileUnitInputs {
    /// Module name, used for diagnostics only
    pub name: String,

    /// Platform the module is built for
    pub target_platform: String,

    pub cpp_standard: CppStandard,

    pub force_include_files: Vec<PathBuf>,

    pub definitions: Vec<String>,

    pub user_include_paths: Vec<PathBuf>,

    pub system_include_paths: Vec<PathBuf>,

    /// `.cpp` translation units
    pub cpp_files: Vec<PathBuf>,

    /// `.cc` translation units, compiled after `cpp_files`
    pub cc_files: Vec<PathBuf>,
}

impl CompileUnitInputs {
    /// All translation units of the module in compile order
    pub fn source_files(&self) -> impl Iterator<Item = &Path> {
        self.cpp_files
            .iter()
            .chain(self.cc_files.iter())
            .map(PathBuf::as_path)
    }
}

/// Compiler executable recorded in every command of a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompilerDescriptor {
    pub path: PathBuf,
}

impl CompilerDescriptor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for CompilerDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER)
    }
}

/// Builds compile commands in the host's flag syntax
///
/// Flag templates are resolved once at construction and reused for every module.
#[derive(Debug, Clone)]
pub struct CompileCommandSynthesizer {
    host: HostPlatform,
    templates: FlagTemplates,
}

impl CompileCommandSynthesizer {
    pub fn new(host: HostPlatform) -> Self {
        let templates = FlagTemplates::for_host(&host);
        Self { host, templates }
    }

    pub fn host(&self) -> &HostPlatform {
        &self.host
    }

    /// Everything in a module's command except the source file
    ///
    /// Order: compiler, standard, host extras, forced includes, user includes,
    /// system includes, definitions.
    pub fn command_prefix(&self, inputs: &CompileUnitInputs, compiler: &CompilerDescriptor) -> String {
        let mut prefix = format!("\"{}\" ", compiler.path.display());

        prefix.push(' ');
        prefix.push_str(standard_flag(&self.host, inputs.cpp_standard));
        prefix.push(' ');
        prefix.push_str(extra_flags(&self.host));

        for file in &inputs.force_include_files {
            self.templates
                .force_include
                .render_into(&mut prefix, &file.to_string_lossy());
        }
        for path in &inputs.user_include_paths {
            self.templates
                .user_include
                .render_into(&mut prefix, &path.to_string_lossy());
        }
        for path in &inputs.system_include_paths {
            self.templates
                .system_include
                .render_into(&mut prefix, &path.to_string_lossy());
        }
        for definition in &inputs.definitions {
            self.templates.definition.render_into(&mut prefix, definition);
        }

        prefix
    }

    /// One entry per source file of the module
    pub fn synthesize(
        &self,
        inputs: &CompileUnitInputs,
        compiler: &CompilerDescriptor,
        working_directory: &str,
    ) -> Vec<CompileCommandEntry> {
        let mut files = inputs.source_files().peekable();
        if files.peek().is_none() {
            return Vec::new();
        }

        let prefix = self.command_prefix(inputs, compiler);
        files
            .map(|path| {
                let file = SourceFile::new(path);
                let command = format!("{prefix} \"{file}\"");
                CompileCommandEntry {
                    file,
                    command,
                    directory: working_directory.to_string(),
                }
            })
            .collect()
    }

    /// Synthesize a module's commands into `database`
    ///
    /// Returns the number of entries registered.
    pub fn register_module(
        &self,
        database: &mut CompilationDatabase,
        inputs: &CompileUnitInputs,
        compiler: &CompilerDescriptor,
        working_directory: &str,
    ) -> usize {
        let entries = self.synthesize(inputs, compiler, working_directory);
        let count = entries.len();
        for entry in entries {
            database.register(entry);
        }

        tracing::trace!(module = %inputs.name, files = count, "Registered module compile commands");
        count
    }
}
