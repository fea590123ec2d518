//! Static lookup tables: skip set, language tags, text extensions

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;

/// Names pruned from every walk and tree, at any depth
pub const SKIP_NAMES: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    ".bzr",
    // Caches and tool state
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    ".tox",
    "node_modules",
    ".venv",
    "venv",
    ".idea",
    ".vscode",
    "target",
    ".DS_Store",
    // Lockfiles
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "poetry.lock",
    "Pipfile.lock",
    "Cargo.lock",
    "composer.lock",
    "Gemfile.lock",
];

static SKIP_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| SKIP_NAMES.iter().copied().collect());

/// Suffixes always treated as text, without content sniffing (lowercase, no dot)
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "markdown", "rst", "adoc", "org", "tex", "py", "pyi", "pyw", "rs", "go", "c",
    "h", "cc", "cpp", "cxx", "hpp", "hh", "cs", "java", "kt", "kts", "scala", "swift", "m", "rb",
    "php", "pl", "lua", "r", "jl", "dart", "ex", "exs", "erl", "hs", "clj", "elm", "js", "mjs",
    "cjs", "jsx", "ts", "tsx", "vue", "svelte", "html", "htm", "css", "scss", "sass", "less",
    "json", "jsonc", "yaml", "yml", "toml", "ini", "cfg", "conf", "env", "xml", "svg", "csv",
    "tsv", "sql", "graphql", "proto", "sh", "bash", "zsh", "fish", "ps1", "bat", "cmd", "mk",
    "cmake", "gradle", "dockerfile", "tf", "nix", "lock", "log",
];

static TEXT_EXTENSION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TEXT_EXTENSIONS.iter().copied().collect());

/// Suffix → markdown code-fence language tag
static LANGUAGE_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("py", "python"),
        ("pyi", "python"),
        ("pyw", "python"),
        ("rs", "rust"),
        ("go", "go"),
        ("c", "c"),
        ("h", "c"),
        ("cc", "cpp"),
        ("cpp", "cpp"),
        ("cxx", "cpp"),
        ("hpp", "cpp"),
        ("hh", "cpp"),
        ("cs", "csharp"),
        ("java", "java"),
        ("kt", "kotlin"),
        ("kts", "kotlin"),
        ("scala", "scala"),
        ("swift", "swift"),
        ("m", "objectivec"),
        ("rb", "ruby"),
        ("php", "php"),
        ("pl", "perl"),
        ("lua", "lua"),
        ("r", "r"),
        ("jl", "julia"),
        ("dart", "dart"),
        ("ex", "elixir"),
        ("exs", "elixir"),
        ("erl", "erlang"),
        ("hs", "haskell"),
        ("clj", "clojure"),
        ("elm", "elm"),
        ("js", "javascript"),
        ("mjs", "javascript"),
        ("cjs", "javascript"),
        ("jsx", "jsx"),
        ("ts", "typescript"),
        ("tsx", "tsx"),
        ("vue", "vue"),
        ("svelte", "svelte"),
        ("html", "html"),
        ("htm", "html"),
        ("css", "css"),
        ("scss", "scss"),
        ("sass", "sass"),
        ("less", "less"),
        ("json", "json"),
        ("jsonc", "json"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("toml", "toml"),
        ("ini", "ini"),
        ("cfg", "ini"),
        ("xml", "xml"),
        ("svg", "xml"),
        ("csv", "csv"),
        ("sql", "sql"),
        ("graphql", "graphql"),
        ("proto", "protobuf"),
        ("sh", "bash"),
        ("bash", "bash"),
        ("zsh", "zsh"),
        ("fish", "fish"),
        ("ps1", "powershell"),
        ("bat", "batch"),
        ("cmd", "batch"),
        ("md", "markdown"),
        ("markdown", "markdown"),
        ("rst", "rst"),
        ("tex", "latex"),
        ("dockerfile", "dockerfile"),
        ("tf", "hcl"),
        ("nix", "nix"),
        ("cmake", "cmake"),
        ("gradle", "groovy"),
        ("mk", "makefile"),
    ])
});

/// Extension-less file name → language tag
static FILE_NAME_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Dockerfile", "dockerfile"),
        ("Containerfile", "dockerfile"),
        ("Makefile", "makefile"),
        ("GNUmakefile", "makefile"),
        ("CMakeLists.txt", "cmake"),
        ("Jenkinsfile", "groovy"),
        ("Rakefile", "ruby"),
        ("Gemfile", "ruby"),
    ])
});

/// Whether a single path component is in the skip set
pub fn is_skipped(name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| SKIP_SET.contains(name))
}

/// Whether a lowercase suffix is on the text allowlist
pub fn is_text_extension(ext: &str) -> bool {
    TEXT_EXTENSION_SET.contains(ext)
}

/// Language tag for a lowercase suffix
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    LANGUAGE_TAGS.get(ext).copied()
}

/// Language tag for a well-known file name
pub fn language_for_file_name(name: &str) -> Option<&'static str> {
    FILE_NAME_TAGS.get(name).copied()
}
