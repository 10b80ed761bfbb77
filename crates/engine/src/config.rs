use std::path::PathBuf;

/// Engine configuration for a single invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// File or directory the count runs against.
    pub root: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}
