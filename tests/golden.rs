//! Golden tests for dirscan
//!
//! These tests run the binary against a checked-in fixture and compare the
//! report body. The absolute scanned path is replaced before comparing since it
//! depends on where the repository is checked out.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the sample project
fn sample_project() -> PathBuf {
    fixtures_dir().join("sample_project")
}

/// Run dirscan on the sample project with `flag` and return the normalized report
fn run_sample(flag: Option<&str>) -> String {
    let cwd = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dirscan"));
    cmd.current_dir(cwd.path()).arg(sample_project());
    if let Some(flag) = flag {
        cmd.arg(flag);
    }
    cmd.assert().success();

    let report = fs::read_to_string(cwd.path().join("sample_project_scan.md")).unwrap();
    normalize(&report, &sample_project().canonicalize().unwrap())
}

fn normalize(report: &str, root: &Path) -> String {
    report.replace(&root.display().to_string(), "<ROOT>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_structure_only() {
        let expected = "\
# Directory Scan: sample_project

**Scanned Path:** `<ROOT>`

**Total Files:** 3

---

## 📄 README.md

**Full Path:** `<ROOT>/README.md`

---

## 📄 docs/guide.md

**Full Path:** `<ROOT>/docs/guide.md`

---

## 📄 src/main.rs

**Full Path:** `<ROOT>/src/main.rs`

---

";
        assert_eq!(run_sample(Some("--path")), expected);
    }

    #[test]
    fn golden_tree() {
        let expected = "\
# Directory Scan: sample_project

**Scanned Path:** `<ROOT>`

**Total Files:** 3

---

## 📂 Project Structure

```text
sample_project
├── docs
│   └── guide.md
├── src
│   └── main.rs
└── README.md
```
";
        assert_eq!(run_sample(Some("--path_tree")), expected);
    }

    #[test]
    fn golden_full_sections() {
        let report = run_sample(None);

        assert!(report.contains(
            "## 📄 src/main.rs\n\n**Full Path:** `<ROOT>/src/main.rs`\n\n**Metrics:** "
        ));
        assert!(report.contains(
            "```rust\nfn main() {\n    println!(\"Hello from sample project!\");\n}\n\n```\n\n---\n\n"
        ));
        assert!(report.contains("```markdown\n# Guide\n\nRun `cargo run` to say hello.\n\n```"));

        let order: Vec<usize> = ["## 📄 README.md", "## 📄 docs/guide.md", "## 📄 src/main.rs"]
            .iter()
            .map(|h| report.find(h).expect("header present"))
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }
}
