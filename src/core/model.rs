//! Scan data model
//!
//! Every discovered file becomes one `FileRecord` before rendering.

use std::fmt;
use std::ops::AddAssign;
use std::path::PathBuf;

/// Sentinel text for binary files
pub const BINARY_SENTINEL: &str = "[Binary file]";

/// Prefix of the sentinel text for unreadable files
pub const ERROR_SENTINEL_PREFIX: &str = "[Error reading file:";

/// How much of the tree a scan reads and what the report contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// File contents with metrics
    #[default]
    Full,
    /// Headers only, no content reads
    StructureOnly,
    /// ASCII tree view only
    Tree,
}

impl ScanMode {
    /// Whether this mode reads file contents
    pub fn reads_content(&self) -> bool {
        matches!(self, ScanMode::Full)
    }
}

/// Text metrics for one file (or a sum over many)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics {
    /// Whitespace-delimited words
    pub words: usize,
    /// Unicode scalar values
    pub characters: usize,
    /// Unicode scalar values excluding whitespace
    pub characters_no_spaces: usize,
    /// `characters / 4`
    pub estimated_gpt_tokens: usize,
    /// Exact cl100k_base token count, when the tokenizer is available
    pub gpt_tokens: Option<usize>,
}

impl Metrics {
    /// All-zero metrics, used for binary and unreadable files
    pub fn zero() -> Self {
        Self::default()
    }
}

impl AddAssign<&Metrics> for Metrics {
    fn add_assign(&mut self, other: &Metrics) {
        self.words += other.words;
        self.characters += other.characters;
        self.characters_no_spaces += other.characters_no_spaces;
        self.estimated_gpt_tokens += other.estimated_gpt_tokens;
        self.gpt_tokens = match (self.gpt_tokens, other.gpt_tokens) {
            (Some(a), Some(b)) => Some(a + b),
            (a, b) => a.or(b),
        };
    }
}

/// What the report shows in place of a file's body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded text (invalid UTF-8 replaced)
    Text(String),
    /// Failed text sniffing
    Binary,
    /// Read failed; carries the I/O error message
    Unreadable(String),
    /// Not read (structure-only and tree modes)
    Omitted,
}

impl FileContent {
    /// The decoded text, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// True for text content that is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.as_text().is_some_and(|text| text.trim().is_empty())
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContent::Text(text) => write!(f, "{}", text),
            FileContent::Binary => write!(f, "{}", BINARY_SENTINEL),
            FileContent::Unreadable(message) => {
                write!(f, "{} {}]", ERROR_SENTINEL_PREFIX, message)
            }
            FileContent::Omitted => Ok(()),
        }
    }
}

/// One discovered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path
    pub path: PathBuf,
    pub content: FileContent,
    /// `None` when nothing was read
    pub metrics: Option<Metrics>,
}

impl FileRecord {
    /// Record for a file that was listed but not read
    pub fn omitted(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Omitted,
            metrics: None,
        }
    }

    /// Record for a text file
    pub fn text(path: impl Into<PathBuf>, content: String, metrics: Metrics) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Text(content),
            metrics: Some(metrics),
        }
    }

    /// Record for a binary file
    pub fn binary(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Binary,
            metrics: Some(Metrics::zero()),
        }
    }

    /// Record for a file whose read failed
    pub fn unreadable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Unreadable(message.into()),
            metrics: Some(Metrics::zero()),
        }
    }
}
