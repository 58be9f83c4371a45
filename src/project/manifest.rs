//! The collaborator that enumerates the members of a manifest-driven project.
//!
//! Parsing the descriptor format is not this crate's concern; a manifest only
//! has to turn a descriptor path into an ordered list of project-relative
//! paths. Entries may use either `\` or `/` as separator.

use super::ProjectError;
use std::path::Path;

/// Lists the source files declared by a project descriptor.
pub trait ProjectFileManifest: Send + Sync {
    /// Returns the project-relative paths declared in `descriptor`, in order.
    fn list_files(&self, descriptor: &Path) -> Result<Vec<String>, ProjectError>;
}

impl<F> ProjectFileManifest for F
where
    F: Fn(&Path) -> Result<Vec<String>, ProjectError> + Send + Sync,
{
    fn list_files(&self, descriptor: &Path) -> Result<Vec<String>, ProjectError> {
        self(descriptor)
    }
}

/// A manifest with a fixed list of entries, for descriptors parsed elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticManifest {
    entries: Vec<String>,
}

impl StaticManifest {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl ProjectFileManifest for StaticManifest {
    fn list_files(&self, _descriptor: &Path) -> Result<Vec<String>, ProjectError> {
        Ok(self.entries.clone())
    }
}
