//! Foundation types for solution modelling.
//!
//! This module provides the primitives everything else is built on:
//! - [`path`] - Canonicalization and component-aware containment tests
//! - [`constants`] - Default extensions and output directory layout
//! - [`error`] - [`ProjectError`], shared by every layer above
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
pub mod error;
pub mod path;

pub use error::ProjectError;

pub use path::{canonicalize, is_subdirectory, join_relative, normalize_separators, relative_to};
