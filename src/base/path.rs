//! Path resolution primitives for consistent file ownership checks.
//!
//! All containment tests in this crate are performed on canonical paths, and
//! prefixes are compared component by component. A raw string prefix would
//! report `/sln/AppX/a.cs` as living under `/sln/App`.

use std::path::{Path, PathBuf};

use super::constants::FOLDER_SEPARATOR;
use super::error::ProjectError;

/// Resolve symlinks and relative segments into an absolute, platform-normalized path.
///
/// A failure means the path cannot be used for comparison. Callers are expected
/// to treat it as absence of information rather than abort.
///
/// # Examples
///
/// ```
/// use solution::base::canonicalize;
///
/// let dir = std::env::temp_dir();
/// assert!(canonicalize(&dir).unwrap().is_absolute());
/// assert!(canonicalize("/definitely/not/here.cs").is_err());
/// ```
pub fn canonicalize(path: impl AsRef<Path>) -> Result<PathBuf, ProjectError> {
    let path = path.as_ref();
    std::fs::canonicalize(path).map_err(|source| ProjectError::io(path, source))
}

/// Strip `base` from `target`, returning the remainder.
///
/// Both paths must already be canonical. Returns `None` when `target` is not
/// `base` or nested under it. When `target == base` the result is empty.
///
/// ```
/// use solution::base::relative_to;
/// use std::path::Path;
///
/// let base = Path::new("/sln/App");
/// assert_eq!(
///     relative_to(base, Path::new("/sln/App/Sub/Foo.cs")),
///     Some(Path::new("Sub/Foo.cs").to_path_buf())
/// );
/// assert_eq!(relative_to(base, Path::new("/sln/AppX/Foo.cs")), None);
/// ```
pub fn relative_to(base: &Path, target: &Path) -> Option<PathBuf> {
    target.strip_prefix(base).ok().map(Path::to_path_buf)
}

/// Check whether `candidate` resolves to `base` or somewhere beneath it.
///
/// `candidate` is canonicalized here; if that fails the answer is `false`.
pub fn is_subdirectory(base: &Path, candidate: &Path) -> bool {
    match canonicalize(candidate) {
        Ok(canonical) => canonical.starts_with(base),
        Err(_) => false,
    }
}

/// Replace Windows separators with forward slashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', &FOLDER_SEPARATOR.to_string())
}

/// Join a project-relative entry onto `base`.
///
/// Project descriptors are usually authored on Windows, so both `\` and `/`
/// are accepted as separators regardless of the host platform.
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    let mut joined = base.to_path_buf();
    for segment in relative.split(['\\', '/']).filter(|s| !s.is_empty()) {
        joined.push(segment);
    }
    joined
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_relative_to_respects_component_boundaries() {
        let base = Path::new("/foo/bar");
        assert_eq!(relative_to(base, Path::new("/foo/barbaz")), None);
        assert_eq!(relative_to(base, Path::new("/foo/barbaz/x.cs")), None);
        assert_eq!(
            relative_to(base, Path::new("/foo/bar/x.cs")),
            Some(PathBuf::from("x.cs"))
        );
    }

    #[test]
    fn test_relative_to_same_path_is_empty() {
        let base = Path::new("/foo/bar");
        assert_eq!(relative_to(base, base), Some(PathBuf::new()));
    }

    #[test]
    fn test_relative_to_outside_base() {
        assert_eq!(relative_to(Path::new("/foo/bar"), Path::new("/other/x.cs")), None);
    }

    #[test]
    fn test_canonicalize_resolves_relative_segments() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let dotted = temp.path().join("sub").join("..").join("sub");
        let canonical = canonicalize(&dotted).unwrap();

        assert_eq!(canonical, canonicalize(temp.path().join("sub")).unwrap());
        assert!(canonical.is_absolute());
    }

    #[test]
    fn test_canonicalize_missing_path_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = canonicalize(temp.path().join("missing.cs")).unwrap_err();
        assert!(matches!(err, ProjectError::Io { .. }));
    }

    #[test]
    fn test_is_subdirectory() {
        let temp = TempDir::new().unwrap();
        let base = canonicalize(temp.path()).unwrap();
        fs::create_dir_all(base.join("a/b")).unwrap();

        assert!(is_subdirectory(&base, &base));
        assert!(is_subdirectory(&base, &base.join("a/b")));
        assert!(is_subdirectory(&base, &base.join("a/b/..")));
        assert!(!is_subdirectory(&base.join("a"), &base));
    }

    #[test]
    fn test_is_subdirectory_sibling_with_shared_prefix() {
        let temp = TempDir::new().unwrap();
        let root = canonicalize(temp.path()).unwrap();
        fs::create_dir(root.join("App")).unwrap();
        fs::create_dir(root.join("AppX")).unwrap();

        assert!(!is_subdirectory(&root.join("App"), &root.join("AppX")));
    }

    #[test]
    fn test_is_subdirectory_unresolvable_candidate_is_false() {
        let temp = TempDir::new().unwrap();
        let base = canonicalize(temp.path()).unwrap();
        assert!(!is_subdirectory(&base, &base.join("nope")));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_subdirectory_follows_symlinks() {
        let temp = TempDir::new().unwrap();
        let root = canonicalize(temp.path()).unwrap();
        fs::create_dir(root.join("inside")).unwrap();
        fs::create_dir(root.join("outside")).unwrap();
        std::os::unix::fs::symlink(root.join("outside"), root.join("inside/link")).unwrap();

        assert!(!is_subdirectory(&root.join("inside"), &root.join("inside/link")));
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_separators("Sub\\Deeper\\Bar.cs"), "Sub/Deeper/Bar.cs");
        assert_eq!(normalize_separators("Sub/Bar.cs"), "Sub/Bar.cs");
        assert_eq!(normalize_separators(""), "");
    }

    #[test]
    fn test_join_relative_accepts_both_separators() {
        let base = Path::new("/sln/App");
        assert_eq!(
            join_relative(base, "Sub\\Bar.cs"),
            PathBuf::from("/sln/App/Sub/Bar.cs")
        );
        assert_eq!(
            join_relative(base, "Sub/Deeper\\Bar.cs"),
            PathBuf::from("/sln/App/Sub/Deeper/Bar.cs")
        );
        assert_eq!(join_relative(base, "Foo.cs"), PathBuf::from("/sln/App/Foo.cs"));
    }
}
