use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::io::{normalize_path, write_atomic};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to write compilation database {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize compilation database: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Identity of a compiled source file
///
/// Holds the lexically normalized path as a string. Ordering is ordinal string
/// comparison, which fixes the order of the serialized database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceFile(String);

impl SourceFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(normalize_path(path.as_ref()).to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One synthesized compiler invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommandEntry {
    pub file: SourceFile,
    pub command: String,
    pub directory: String,
}

/// On-disk record; field order is the serialized order
#[derive(Serialize)]
struct CompileCommandRecord<'a> {
    file: &'a str,
    command: &'a str,
    directory: &'a str,
}

/// Run-scoped mapping from source file to its compile command
///
/// Entries are registered as modules are visited. A later registration for the
/// same file replaces the earlier one. The database is written once by
/// [`CompilationDatabase::flush`].
#[derive(Debug, Default)]
pub struct CompilationDatabase {
    entries: HashMap<SourceFile, CompileCommandEntry>,
}

impl CompilationDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `entry.file`
    pub fn register(&mut self, entry: CompileCommandEntry) {
        if let Some(previous) = self.entries.get(&entry.file)
            && previous.command != entry.command
        {
            debug!(
                file = %entry.file,
                "Replacing compile command registered by an earlier module"
            );
        }
        self.entries.insert(entry.file.clone(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, file: &SourceFile) -> Option<&CompileCommandEntry> {
        self.entries.get(file)
    }

    /// All entries sorted by file
    pub fn entries(&self) -> Vec<&CompileCommandEntry> {
        let mut entries: Vec<&CompileCommandEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.file.cmp(&b.file));
        entries
    }

    /// Render the database as a compact JSON array sorted by file
    ///
    /// Every record's `directory` is `working_directory`.
    pub fn to_json(&self, working_directory: &str) -> Result<Vec<u8>, DatabaseError> {
        let records: Vec<CompileCommandRecord<'_>> = self
            .entries()
            .into_iter()
            .map(|entry| CompileCommandRecord {
                file: entry.file.as_str(),
                command: &entry.command,
                directory: working_directory,
            })
            .collect();

        Ok(serde_json::to_vec(&records)?)
    }

    /// Write the database to `path` and consume it
    ///
    /// The whole document is rendered before anything touches the destination,
    /// then written through a temporary file and renamed into place.
    /// Returns the number of entries written.
    pub fn flush(self, path: &Path, working_directory: &str) -> Result<usize, DatabaseError> {
        let json = self.to_json(working_directory)?;

        write_atomic(path, &json).map_err(|source| DatabaseError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            entries = self.entries.len(),
            "Wrote compilation database"
        );
        Ok(self.entries.len())
    }
}
