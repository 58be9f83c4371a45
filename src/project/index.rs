//! The per-project source index.
//!
//! An index is built once, by exactly one strategy, and never updated. Entries
//! that cannot be resolved are skipped and recorded as diagnostics so callers
//! can tell an empty project from one with broken entries.

use super::ProjectFileManifest;
use crate::base::constants::FOLDER_SEPARATOR;
use crate::base::path::{canonicalize, join_relative, normalize_separators};
use indexmap::IndexMap;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// A source file owned by a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    folder: String,
    file_name: String,
    project: Arc<str>,
}

impl SourceFile {
    pub fn new(
        path: PathBuf,
        folder: impl Into<String>,
        file_name: impl Into<String>,
        project: Arc<str>,
    ) -> Self {
        Self {
            path,
            folder: folder.into(),
            file_name: file_name.into(),
            project,
        }
    }

    /// Canonical absolute path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Containing folder.
    ///
    /// For manifest entries this is relative to the project with `/`
    /// separators (empty at the project root). For scanned files it is the
    /// file's parent directory.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Name of the owning project.
    pub fn project(&self) -> &str {
        &self.project
    }
}

/// How an index was populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexStrategy {
    /// Entries listed by the project descriptor.
    Manifest,
    /// Files discovered by walking the base directory.
    Scan,
}

/// An entry skipped while building an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDiagnostic {
    pub path: PathBuf,
    pub message: String,
}

impl IndexDiagnostic {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for IndexDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Canonical path → [`SourceFile`], in discovery order.
#[derive(Debug, Clone)]
pub struct SourceIndex {
    strategy: IndexStrategy,
    files: IndexMap<PathBuf, SourceFile>,
    diagnostics: Vec<IndexDiagnostic>,
}

impl SourceIndex {
    /// Build an index from the entries a manifest declares for `descriptor`.
    ///
    /// Each entry is joined onto `base_directory` and canonicalized. A manifest
    /// that fails entirely yields an empty index with a single diagnostic.
    pub fn from_manifest(
        project: &Arc<str>,
        base_directory: &Path,
        descriptor: &Path,
        manifest: &dyn ProjectFileManifest,
    ) -> Self {
        let mut index = Self::empty(IndexStrategy::Manifest);

        let entries = match manifest.list_files(descriptor) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Cannot list files of {}: {}", descriptor.display(), e);
                index.diagnostics.push(IndexDiagnostic::new(descriptor, e.to_string()));
                return index;
            }
        };

        for entry in entries {
            let candidate = join_relative(base_directory, &entry);
            let canonical = match canonicalize(&candidate) {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!("Bad file in project {}: {}", project, entry);
                    index.diagnostics.push(IndexDiagnostic::new(candidate, e.to_string()));
                    continue;
                }
            };

            let (folder, entry_name) = split_entry(&entry);
            let file_name = canonical
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(entry_name);

            let source = SourceFile::new(canonical.clone(), folder, file_name, project.clone());
            index.files.insert(canonical, source);
        }

        index
    }

    /// Build an index by walking `base_directory` for files ending in `.extension`.
    ///
    /// The extension is compared case-insensitively. Directories are visited
    /// depth-first in file-name order; unreadable ones are skipped. Symbolic
    /// links are followed and judged by their target, and a target reached
    /// twice keeps its first record.
    pub fn scan(project: &Arc<str>, base_directory: &Path, extension: &str) -> Self {
        let mut index = Self::empty(IndexStrategy::Scan);
        let suffix = format!(".{}", extension.trim_start_matches('.')).to_lowercase();

        let walker = WalkDir::new(base_directory)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| base_directory.to_path_buf());
                    tracing::debug!("Skipping unreadable entry {}: {}", path.display(), e);
                    index.diagnostics.push(IndexDiagnostic::new(path, e.to_string()));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            // Links are judged by their target; plain files can be filtered by name.
            if !entry.path_is_symlink() && !has_suffix(entry.file_name(), &suffix) {
                continue;
            }

            let canonical = match canonicalize(entry.path()) {
                Ok(path) => path,
                Err(e) => {
                    index.diagnostics.push(IndexDiagnostic::new(entry.path(), e.to_string()));
                    continue;
                }
            };
            let Some(file_name) = canonical.file_name() else {
                continue;
            };
            if !has_suffix(file_name, &suffix) || index.files.contains_key(&canonical) {
                continue;
            }
            let file_name = file_name.to_string_lossy().into_owned();
            let folder = canonical
                .parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default();

            let source = SourceFile::new(canonical.clone(), folder, file_name, project.clone());
            index.files.insert(canonical, source);
        }

        index
    }

    fn empty(strategy: IndexStrategy) -> Self {
        Self {
            strategy,
            files: IndexMap::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn strategy(&self) -> IndexStrategy {
        self.strategy
    }

    /// Look up a file by its canonical path.
    pub fn get(&self, canonical: &Path) -> Option<&SourceFile> {
        self.files.get(canonical)
    }

    pub fn contains(&self, canonical: &Path) -> bool {
        self.files.contains_key(canonical)
    }

    pub fn files(&self) -> impl ExactSizeIterator<Item = &SourceFile> {
        self.files.values()
    }

    /// Canonical paths of every indexed file.
    pub fn paths(&self) -> impl ExactSizeIterator<Item = &PathBuf> {
        self.files.keys()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Entries skipped while building.
    pub fn diagnostics(&self) -> &[IndexDiagnostic] {
        &self.diagnostics
    }
}

fn has_suffix(name: &OsStr, lowercase_suffix: &str) -> bool {
    name.to_string_lossy().to_lowercase().ends_with(lowercase_suffix)
}

/// Split a manifest entry into its `/`-separated folder and its file name.
fn split_entry(entry: &str) -> (String, String) {
    let normalized = normalize_separators(entry);
    let trimmed = normalized.trim_matches(FOLDER_SEPARATOR);
    match trimmed.rsplit_once(FOLDER_SEPARATOR) {
        Some((folder, name)) => (folder.to_string(), name.to_string()),
        None => (String::new(), trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::split_entry;

    #[test]
    fn test_split_entry() {
        assert_eq!(split_entry("Foo.cs"), (String::new(), "Foo.cs".to_string()));
        assert_eq!(
            split_entry("Sub\\Bar.cs"),
            ("Sub".to_string(), "Bar.cs".to_string())
        );
        assert_eq!(
            split_entry("A\\B/C.cs"),
            ("A/B".to_string(), "C.cs".to_string())
        );
    }
}
