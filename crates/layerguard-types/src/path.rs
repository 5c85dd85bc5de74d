use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical repo-relative path of a source file.
///
/// Normalization:
/// - always forward slashes (`/`), including paths produced on Windows
/// - no leading `./`
/// - the empty path is spelled `.`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(stripped) = v.strip_prefix("./") {
            v = stripped.to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    /// Express `abs` relative to `root`; paths outside `root` are kept as given.
    pub fn relative_to(root: &Utf8Path, abs: &Utf8Path) -> Self {
        RepoPath::new(abs.strip_prefix(root).unwrap_or(abs).as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty `/`-separated components.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty() && *s != ".")
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepoPath {
    fn from(value: &str) -> Self {
        RepoPath::new(value)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}
