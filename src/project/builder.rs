use super::core::Descriptor;
use super::{ArtifactKind, Project, ProjectError, ProjectFileManifest};
use crate::base::constants::{
    DEFAULT_DEBUG_OUTPUT_DIR, DEFAULT_RELEASE_OUTPUT_DIR, DEFAULT_SOURCE_EXTENSION,
};
use crate::base::path::canonicalize;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::Arc;

/// Collects the already-parsed descriptor data of a project.
///
/// Anything left unset falls back to Visual Studio conventions: the assembly
/// is named after the project, the root namespace after the assembly, and
/// outputs land in `bin/Debug` and `bin/Release` under the base directory.
pub struct ProjectBuilder {
    name: String,
    base_directory: PathBuf,
    descriptor: Option<Descriptor>,
    artifact_kind: Option<ArtifactKind>,
    assembly_name: Option<String>,
    root_namespace: Option<String>,
    debug_output_dir: Option<PathBuf>,
    release_output_dir: Option<PathBuf>,
    test: bool,
    scan_extension: String,
}

impl ProjectBuilder {
    pub fn new(name: impl Into<String>, base_directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_directory: base_directory.into(),
            descriptor: None,
            artifact_kind: None,
            assembly_name: None,
            root_namespace: None,
            debug_output_dir: None,
            release_output_dir: None,
            test: false,
            scan_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }

    /// Make this a manifest-driven project.
    pub fn descriptor(
        mut self,
        path: impl Into<PathBuf>,
        manifest: Arc<dyn ProjectFileManifest>,
    ) -> Self {
        self.descriptor = Some(Descriptor {
            path: path.into(),
            manifest,
        });
        self
    }

    pub fn artifact_kind(mut self, kind: ArtifactKind) -> Self {
        self.artifact_kind = Some(kind);
        self
    }

    pub fn assembly_name(mut self, assembly_name: impl Into<String>) -> Self {
        self.assembly_name = Some(assembly_name.into());
        self
    }

    pub fn root_namespace(mut self, root_namespace: impl Into<String>) -> Self {
        self.root_namespace = Some(root_namespace.into());
        self
    }

    /// Debug output directory. Relative paths are taken from the base directory.
    pub fn debug_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_output_dir = Some(dir.into());
        self
    }

    /// Release output directory. Relative paths are taken from the base directory.
    pub fn release_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.release_output_dir = Some(dir.into());
        self
    }

    pub fn test_project(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Extension collected when the project has no descriptor. A leading dot is ignored.
    pub fn scan_extension(mut self, extension: impl Into<String>) -> Self {
        self.scan_extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Resolve the base directory and produce the project.
    ///
    /// Fails with [`ProjectError::InvalidState`] if the base directory cannot be
    /// canonicalized or is not a directory.
    pub fn build(self) -> Result<Project, ProjectError> {
        let base_directory = canonicalize(&self.base_directory).map_err(|e| {
            ProjectError::invalid_state(format!("invalid project directory for {}: {}", self.name, e))
        })?;
        if !base_directory.is_dir() {
            return Err(ProjectError::invalid_state(format!(
                "project directory for {} is not a directory: {}",
                self.name,
                base_directory.display()
            )));
        }

        let assembly_name = self.assembly_name.unwrap_or_else(|| self.name.clone());
        let root_namespace = self.root_namespace.unwrap_or_else(|| assembly_name.clone());
        let debug_output_dir = base_directory.join(
            self.debug_output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DEBUG_OUTPUT_DIR)),
        );
        let release_output_dir = base_directory.join(
            self.release_output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RELEASE_OUTPUT_DIR)),
        );

        Ok(Project {
            name: Arc::from(self.name),
            descriptor: self.descriptor,
            artifact_kind: self.artifact_kind,
            assembly_name,
            root_namespace,
            debug_output_dir,
            release_output_dir,
            base_directory,
            test: self.test,
            scan_extension: self.scan_extension,
            index: OnceCell::new(),
        })
    }
}
