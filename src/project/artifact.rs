use crate::base::constants::{EXECUTABLE_EXTENSION, LIBRARY_EXTENSION};
use std::fmt;

/// Kind of build output a project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Executable,
    Library,
    Web,
}

impl ArtifactKind {
    /// File extension of the produced artifact, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Executable => EXECUTABLE_EXTENSION,
            ArtifactKind::Library | ArtifactKind::Web => LIBRARY_EXTENSION,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Executable => "EXECUTABLE",
            ArtifactKind::Library => "LIBRARY",
            ArtifactKind::Web => "WEB",
        };
        f.write_str(name)
    }
}
