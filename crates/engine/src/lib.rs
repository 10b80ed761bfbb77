// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod matcher;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{RunResult, TargetKind};
use std::path::PathBuf;

/// Run the word counting engine.
///
/// Dispatches on the path type of `config.root`: a matching file is counted on
/// its own, a directory is counted recursively in one sequential pass.
/// Individual files that cannot be read are collected in `RunResult::skipped`
/// and contribute zero words.
///
/// # Errors
///
/// Returns an error only for invocation-level failures: `PathNotFound` if the
/// root does not exist, `UnsupportedFile` for a file argument whose name fails
/// the extension filter, and `NotFileOrDirectory` for any other path type.
pub fn run(config: &Config) -> Result<RunResult> {
    let root = &config.root;
    let Ok(meta) = std::fs::metadata(root) else {
        return Err(EngineError::PathNotFound(root.clone()));
    };

    if meta.is_file() {
        if !matcher::path_matches(root) {
            return Err(EngineError::UnsupportedFile(root.clone()));
        }
        let mut result = RunResult::new(TargetKind::File, root.clone());
        tally(&mut result, root.clone());
        Ok(result)
    } else if meta.is_dir() {
        let mut result = RunResult::new(TargetKind::Directory, root.clone());
        for path in filesystem::walk_files(root) {
            tally(&mut result, path);
        }
        Ok(result)
    } else {
        Err(EngineError::NotFileOrDirectory(root.clone()))
    }
}

/// Add one file's count to the running total, or record it as skipped.
fn tally(result: &mut RunResult, path: PathBuf) {
    match processor::count_words(&path) {
        Ok(words) => {
            result.words += words;
            result.files += 1;
        }
        Err(e) => result.skipped.push((path, e)),
    }
}
