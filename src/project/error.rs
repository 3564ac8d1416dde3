use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generation manifest not found: {path}")]
    ManifestNotFound { path: String },

    #[error("Failed to parse generation manifest {path}: {error}")]
    ManifestParse { path: String, error: String },

    #[error("Unsupported host platform {platform}")]
    UnsupportedHostPlatform { platform: String },

    #[error("Target {target} cannot be built for {platform} {configuration}")]
    Unbuildable {
        target: String,
        platform: String,
        configuration: String,
    },

    #[error("Target {target} has no executable binary")]
    NoExecutable { target: String },

    #[error("Failed to write project descriptor {path}: {source}")]
    DescriptorWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize project descriptor: {0}")]
    Serialize(#[from] serde_json::Error),
}
