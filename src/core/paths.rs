//! Path display utilities
//!
//! Report headers always use '/' as separator and are relative to the scan root.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Header label for a path: relative to root, or the full path when not nested under it
pub fn display_relative(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

/// Last component of a path as a string, if any
pub fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.rs");
        assert_eq!(normalize_path(path), "src/main.rs");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/main.rs");
        assert_eq!(make_relative(path, root), Some("src/main.rs".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.rs");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_display_relative_falls_back_to_full_path() {
        let root = Path::new("/project");
        assert_eq!(
            display_relative(Path::new("/project/a/b.txt"), root),
            "a/b.txt"
        );
        assert_eq!(
            display_relative(Path::new("/elsewhere/b.txt"), root),
            "/elsewhere/b.txt"
        );
    }

    #[test]
    fn test_dir_name() {
        assert_eq!(dir_name(Path::new("/tmp/project")), Some("project".to_string()));
        assert_eq!(dir_name(Path::new("/")), None);
    }
}
