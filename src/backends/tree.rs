//! ASCII tree view of a directory
//!
//! Directories sort before files, then by case-insensitive name. Skip-set names
//! are left out at every level, as are any excluded paths, and symlinked
//! directories are not descended.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::console;
use crate::core::paths::dir_name;
use crate::core::tables::is_skipped;
use crate::error::{Result, ScanError};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_PREFIX: &str = "│   ";
const SPACE_PREFIX: &str = "    ";

struct TreeEntry {
    name: String,
    path: PathBuf,
    is_file: bool,
    descend: bool,
}

/// Render the tree rooted at `root`, one line per entry, without a trailing newline.
///
/// Entries whose path is in `exclude` are left out.
pub fn build_tree(root: &Path, exclude: &[PathBuf]) -> Result<String> {
    if !root.exists() {
        return Err(ScanError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let entries = read_entries(root, exclude).map_err(|e| ScanError::io(root, e))?;

    let mut lines = vec![dir_name(root).unwrap_or_else(|| root.display().to_string())];
    walk(entries, "", exclude, &mut lines);
    Ok(lines.join("\n"))
}

fn walk(entries: Vec<TreeEntry>, prefix: &str, exclude: &[PathBuf], lines: &mut Vec<String>) {
    let count = entries.len();
    for (i, entry) in entries.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{}{}{}", prefix, connector, entry.name));

        if !entry.descend {
            continue;
        }

        match read_entries(&entry.path, exclude) {
            Ok(children) => {
                let extension = if is_last { SPACE_PREFIX } else { PIPE_PREFIX };
                walk(children, &format!("{}{}", prefix, extension), exclude, lines);
            }
            Err(e) => console::warn(format!("cannot list {}: {}", entry.path.display(), e)),
        }
    }
}

/// Sorted, filtered children of one directory
fn read_entries(dir: &Path, exclude: &[PathBuf]) -> std::io::Result<Vec<TreeEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if is_skipped(&entry.file_name()) {
            continue;
        }
        let path = entry.path();
        if exclude.contains(&path) {
            continue;
        }
        let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);
        entries.push(TreeEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_file: path.is_file(),
            descend: !is_symlink && path.is_dir(),
            path,
        });
    }

    entries.sort_by_cached_key(|e| (e.is_file, e.name.to_lowercase()));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn lines_after_root(tree: &str) -> Vec<&str> {
        tree.lines().skip(1).collect()
    }

    #[test]
    fn test_dirs_before_files_and_nesting() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("X");
        fs::create_dir_all(root.join("A")).unwrap();
        fs::write(root.join("A/a.txt"), "a").unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();

        let tree = build_tree(&root, &[]).unwrap();
        assert_eq!(tree, "X\n├── A\n│   └── a.txt\n└── b.txt");
    }

    #[test]
    fn test_case_insensitive_ordering() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("beta.txt"), "").unwrap();
        fs::write(temp.path().join("Alpha.txt"), "").unwrap();
        fs::write(temp.path().join("gamma.txt"), "").unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();

        let tree = build_tree(temp.path(), &[]).unwrap();
        assert_eq!(
            lines_after_root(&tree),
            vec!["├── zeta", "├── Alpha.txt", "├── beta.txt", "└── gamma.txt"]
        );
    }

    #[test]
    fn test_last_directory_uses_space_prefix() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a/inner")).unwrap();
        fs::write(temp.path().join("a/inner/deep.rs"), "").unwrap();

        let tree = build_tree(temp.path(), &[]).unwrap();
        assert_eq!(
            lines_after_root(&tree),
            vec!["└── a", "    └── inner", "        └── deep.rs"]
        );
    }

    #[test]
    fn test_skip_set_excluded_at_every_level() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".git/config"), "").unwrap();
        fs::create_dir_all(temp.path().join("src/__pycache__")).unwrap();
        fs::write(temp.path().join("src/__pycache__/m.pyc"), "").unwrap();
        fs::write(temp.path().join("src/m.py"), "").unwrap();

        let tree = build_tree(temp.path(), &[]).unwrap();
        assert!(!tree.contains(".git"));
        assert!(!tree.contains("__pycache__"));
        assert!(tree.contains("m.py"));
    }

    #[test]
    fn test_excluded_paths_left_out() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("proj");
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("proj_scan.md"), "").unwrap();
        fs::write(root.join("docs/proj_scan.md"), "").unwrap();

        let tree = build_tree(&root, &[root.join("proj_scan.md")]).unwrap();
        assert_eq!(
            lines_after_root(&tree),
            vec!["├── docs", "│   └── proj_scan.md", "└── a.txt"]
        );
    }

    #[test]
    fn test_empty_root() {
        let temp = tempdir().unwrap();
        let tree = build_tree(temp.path(), &[]).unwrap();
        assert_eq!(tree.lines().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_descended() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        fs::write(temp.path().join("real/file.txt"), "").unwrap();
        std::os::unix::fs::symlink(temp.path(), temp.path().join("real/loop")).unwrap();

        let tree = build_tree(temp.path(), &[]).unwrap();
        assert_eq!(
            lines_after_root(&tree),
            vec!["└── real", "    ├── loop", "    └── file.txt"]
        );
    }

    #[test]
    fn test_missing_root() {
        let temp = tempdir().unwrap();
        let err = build_tree(&temp.path().join("missing"), &[]).unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }
}
