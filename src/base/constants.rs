//! Domain constants shared across the crate.

/// Extension (without the dot) collected by scan-driven projects by default.
pub const DEFAULT_SOURCE_EXTENSION: &str = "cs";

/// Debug output directory, relative to the project base directory.
pub const DEFAULT_DEBUG_OUTPUT_DIR: &str = "bin/Debug";

/// Release output directory, relative to the project base directory.
pub const DEFAULT_RELEASE_OUTPUT_DIR: &str = "bin/Release";

/// Artifact extension for executables.
pub const EXECUTABLE_EXTENSION: &str = "exe";

/// Artifact extension for libraries and web projects.
pub const LIBRARY_EXTENSION: &str = "dll";

/// Separator used for the `folder` of manifest-driven source files.
pub const FOLDER_SEPARATOR: char = '/';
