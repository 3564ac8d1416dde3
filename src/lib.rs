//! Editor project file and compilation database generation
//!
//! Consumes build targets, platforms and compile environments already resolved
//! by a host build system and writes:
//!
//! - an editor project descriptor (`.uemacs/project.json`)
//! - a Clang compilation database (`compile_commands.json`)

pub mod compile_commands;
pub mod config;
pub mod flags;
pub mod generator;
pub mod io;
pub mod logging;
pub mod platform;
pub mod project;

#[cfg(test)]
mod test_utils;

pub use compile_commands::{
    CompilationDatabase, CompileCommandEntry, CompileCommandSynthesizer, CompileUnitInputs,
    CompilerDescriptor, SourceFile,
};
pub use config::GeneratorConfig;
pub use generator::{
    EditorProjectGenerator, GenerationReport, GeneratorError, ProjectFileGenerator,
};
pub use platform::{CppStandard, HostPlatform};
pub use project::GenerationManifest;
