//! Project metadata generation
//!
//! Reads the host's generation manifest and writes the editor project
//! descriptor. Host-specific build scripts are resolved once per run through
//! [`ScriptLocator`].

pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod scripts;

pub use descriptor::{
    PROJECT_DESCRIPTOR_FILE, PROJECT_FILE_FORMAT_VERSION, ProjectDescriptor, SkippedTarget,
};
pub use error::ProjectError;
pub use manifest::{
    BinaryType, BuildBinary, BuildTarget, GenerationManifest, IntellisenseSelection, PlatformInfo,
    ProjectTarget, TargetResolver, TargetType,
};
pub use scripts::ScriptLocator;
