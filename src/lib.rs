//! # solution-base
//!
//! Core library for modelling build solutions: which project owns a source
//! file, and where that file sits relative to its project.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! solution  → Solution: ordered projects, cross-project lookup
//!   ↓
//! project   → Project, SourceIndex, manifests, ProjectError
//!   ↓
//! base      → Path primitives (canonicalize, relative_to, is_subdirectory)
//! ```

// ============================================================================
// MODULES (dependency order: base → project → solution)
// ============================================================================

/// Foundation: path resolution primitives and constants
pub mod base;

/// Projects: artifact descriptors, manifests, lazily built source indexes
pub mod project;

/// Solutions: ordered project collections and cross-project lookups
pub mod solution;

// Re-export commonly needed items
pub use project::{
    ArtifactKind, IndexDiagnostic, IndexStrategy, Project, ProjectBuilder, ProjectError,
    ProjectFileManifest, SourceFile, SourceIndex, StaticManifest,
};
pub use solution::Solution;
