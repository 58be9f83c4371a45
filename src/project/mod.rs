mod artifact;
mod builder;
mod core;
mod index;
mod manifest;
#[cfg(feature = "msbuild")]
pub mod msbuild;

pub use artifact::ArtifactKind;
pub use builder::ProjectBuilder;
pub use self::core::Project;
pub use crate::base::ProjectError;
pub use index::{IndexDiagnostic, IndexStrategy, SourceFile, SourceIndex};
pub use manifest::{ProjectFileManifest, StaticManifest};

#[cfg(feature = "msbuild")]
pub use msbuild::MsBuildManifest;
