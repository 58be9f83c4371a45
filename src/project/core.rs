use super::{ArtifactKind, ProjectBuilder, ProjectError, ProjectFileManifest, SourceFile, SourceIndex};
use crate::base::path::{canonicalize, is_subdirectory, relative_to};
use once_cell::sync::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Descriptor paired with the manifest that can enumerate it.
#[derive(Clone)]
pub(super) struct Descriptor {
    pub(super) path: PathBuf,
    pub(super) manifest: Arc<dyn ProjectFileManifest>,
}

/// A project within a solution.
///
/// Built through [`ProjectBuilder`], then read-only apart from the source
/// index, which is computed on first use and cached for the project's lifetime.
pub struct Project {
    pub(super) name: Arc<str>,
    pub(super) descriptor: Option<Descriptor>,
    pub(super) artifact_kind: Option<ArtifactKind>,
    pub(super) assembly_name: String,
    pub(super) root_namespace: String,
    pub(super) debug_output_dir: PathBuf,
    pub(super) release_output_dir: PathBuf,
    pub(super) base_directory: PathBuf,
    pub(super) test: bool,
    pub(super) scan_extension: String,
    pub(super) index: OnceCell<SourceIndex>,
}

impl Project {
    /// Start describing a project rooted at `base_directory`.
    pub fn builder(name: impl Into<String>, base_directory: impl Into<PathBuf>) -> ProjectBuilder {
        ProjectBuilder::new(name, base_directory)
    }

    /// Start describing a manifest-driven project whose base directory is the
    /// descriptor's parent.
    pub fn from_descriptor(
        name: impl Into<String>,
        descriptor: impl Into<PathBuf>,
        manifest: Arc<dyn ProjectFileManifest>,
    ) -> ProjectBuilder {
        let descriptor = descriptor.into();
        let base_directory = descriptor
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        ProjectBuilder::new(name, base_directory).descriptor(descriptor, manifest)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the build descriptor, absent for scan-driven projects.
    pub fn descriptor_path(&self) -> Option<&Path> {
        self.descriptor.as_ref().map(|d| d.path.as_path())
    }

    pub fn artifact_kind(&self) -> Option<ArtifactKind> {
        self.artifact_kind
    }

    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    pub fn debug_output_dir(&self) -> &Path {
        &self.debug_output_dir
    }

    pub fn release_output_dir(&self) -> &Path {
        &self.release_output_dir
    }

    /// Canonical directory that roots this project.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn is_test_project(&self) -> bool {
        self.test
    }

    /// Extension used when scanning for sources.
    pub fn scan_extension(&self) -> &str {
        &self.scan_extension
    }

    /// Artifact extension (`exe` or `dll`).
    ///
    /// Fails with [`ProjectError::InvalidState`] when no artifact kind is set.
    pub fn artifact_extension(&self) -> Result<&'static str, ProjectError> {
        self.artifact_kind.map(ArtifactKind::extension).ok_or_else(|| {
            ProjectError::invalid_state(format!("project {} has no artifact kind", self.name))
        })
    }

    /// File name of the generated artifact, e.g. `MyLib.dll`.
    pub fn artifact_name(&self) -> Result<String, ProjectError> {
        Ok(format!("{}.{}", self.assembly_name, self.artifact_extension()?))
    }

    pub fn debug_artifact_path(&self) -> Result<PathBuf, ProjectError> {
        Ok(self.debug_output_dir.join(self.artifact_name()?))
    }

    pub fn release_artifact_path(&self) -> Result<PathBuf, ProjectError> {
        Ok(self.release_output_dir.join(self.artifact_name()?))
    }

    /// Path of `file` relative to the project directory.
    ///
    /// For a project in `C:/MySolution/MyProject` and the file
    /// `C:/MySolution/MyProject/Dummy/Foo.cs` this is `Dummy/Foo.cs`. Returns
    /// `None` if the file is outside the project or cannot be resolved.
    pub fn relative_path(&self, file: impl AsRef<Path>) -> Option<PathBuf> {
        let directory = canonicalize(&self.base_directory).ok()?;
        let file = canonicalize(file).ok()?;
        relative_to(&directory, &file)
    }

    /// The source index, building it on first access.
    ///
    /// Concurrent first calls build the index once; every caller sees the
    /// same finished value.
    pub fn source_index(&self) -> &SourceIndex {
        self.index.get_or_init(|| self.build_index())
    }

    /// All files of the project, in discovery order.
    pub fn source_files(&self) -> impl ExactSizeIterator<Item = &SourceFile> {
        self.source_index().files()
    }

    /// The source record of `file`, or `None` if it is not part of the project.
    pub fn file(&self, file: impl AsRef<Path>) -> Option<&SourceFile> {
        let canonical = canonicalize(file).ok()?;
        self.source_index().get(&canonical)
    }

    /// Whether the project's index includes `file`.
    pub fn contains(&self, file: impl AsRef<Path>) -> bool {
        self.file(file).is_some()
    }

    /// Whether `file` lies under the project directory, indexed or not.
    pub fn is_parent_directory_of(&self, file: impl AsRef<Path>) -> bool {
        is_subdirectory(&self.base_directory, file.as_ref())
    }

    fn build_index(&self) -> SourceIndex {
        let index = match &self.descriptor {
            Some(descriptor) => SourceIndex::from_manifest(
                &self.name,
                &self.base_directory,
                &descriptor.path,
                descriptor.manifest.as_ref(),
            ),
            None => SourceIndex::scan(&self.name, &self.base_directory, &self.scan_extension),
        };
        tracing::debug!(
            "Indexed project {} ({:?}): {} file(s), {} skipped",
            self.name,
            index.strategy(),
            index.len(),
            index.diagnostics().len()
        );
        index
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor_path())
            .field("artifact_kind", &self.artifact_kind)
            .field("assembly_name", &self.assembly_name)
            .field("base_directory", &self.base_directory)
            .field("test", &self.test)
            .field("indexed", &self.index.get().is_some())
            .finish()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self
            .artifact_kind
            .map(|k| k.to_string())
            .unwrap_or_else(|| "UNSET".to_string());
        let file = self
            .descriptor_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        write!(
            f,
            "Project(name={}, type={}, test={}, directory={}, file={}, assemblyName={}, rootNamespace={}, debugDir={}, releaseDir={})",
            self.name,
            kind,
            self.test,
            self.base_directory.display(),
            file,
            self.assembly_name,
            self.root_namespace,
            self.debug_output_dir.display(),
            self.release_output_dir.display()
        )
    }
}
