//! # Solution
//!
//! An ordered set of projects sharing a root descriptor. Every lookup scans the
//! projects in the order they were supplied and returns the first match, so
//! overlapping projects resolve deterministically.

use crate::project::Project;
use std::fmt;
use std::path::{Path, PathBuf};

/// A build solution and the projects it declares.
#[derive(Debug)]
pub struct Solution {
    root_file: PathBuf,
    root_directory: PathBuf,
    name: String,
    projects: Vec<Project>,
}

impl Solution {
    /// Creates a solution from its descriptor file and already-built projects.
    ///
    /// The name defaults to the descriptor's file stem.
    pub fn new(root_file: impl Into<PathBuf>, projects: Vec<Project>) -> Self {
        let root_file = root_file.into();
        let root_directory = root_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let name = root_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            root_file,
            root_directory,
            name,
            projects,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptor file defining the solution.
    pub fn root_file(&self) -> &Path {
        &self.root_file
    }

    /// Parent directory of the descriptor file.
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The first project whose source index includes `file`.
    pub fn project_for_file(&self, file: impl AsRef<Path>) -> Option<&Project> {
        let file = file.as_ref();
        let found = self.projects.iter().find(|p| p.contains(file));
        if found.is_none() {
            tracing::trace!("No project of {} contains {}", self.name, file.display());
        }
        found
    }

    /// The first project whose directory contains `file`, indexed or not.
    pub fn project_by_location(&self, file: impl AsRef<Path>) -> Option<&Project> {
        let file = file.as_ref();
        let found = self
            .projects
            .iter()
            .find(|p| p.is_parent_directory_of(file));
        if found.is_none() {
            tracing::trace!("No project of {} is located above {}", self.name, file.display());
        }
        found
    }

    /// The first project whose assembly name matches, ignoring case.
    pub fn project_by_assembly_name(&self, assembly_name: &str) -> Option<&Project> {
        let wanted = assembly_name.to_lowercase();
        self.projects
            .iter()
            .find(|p| p.assembly_name().to_lowercase() == wanted)
    }

    /// Test projects, in solution order.
    pub fn test_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_test_project()).collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution(path={})", self.root_file.display())
    }
}

#[cfg(test)]
mod tests;
