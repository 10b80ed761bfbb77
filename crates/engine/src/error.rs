use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path does not exist: {0}")]
    PathNotFound(std::path::PathBuf),

    #[error("File must be .md, .mdx, or .txt")]
    UnsupportedFile(std::path::PathBuf),

    #[error("Path is neither a file nor a directory: {0}")]
    NotFileOrDirectory(std::path::PathBuf),
}

pub type Result<T> = std::result::Result<T, EngineError>;
