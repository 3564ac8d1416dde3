//! Compilation database synthesis
//!
//! Builds per-file compiler invocations from host-resolved module compile
//! environments and aggregates them into a `compile_commands.json` document.

pub mod database;
pub mod synthesizer;

pub use database::{CompilationDatabase, CompileCommandEntry, DatabaseError, SourceFile};
pub use synthesizer::{CompileCommandSynthesizer, CompileUnitInputs, CompilerDescriptor};

/// File name of the compilation database
pub const COMPILATION_DATABASE_FILE: &str = "compile_commands.json";
