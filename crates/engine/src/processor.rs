use crate::error::{EngineError, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Count the whitespace-delimited words in a single file.
///
/// The whole file is read and decoded as UTF-8 with invalid sequences
/// dropped, so a partially corrupted file still yields a count. Leading and
/// trailing whitespace produce no empty tokens.
///
/// # Errors
///
/// Returns `FileRead` if the file cannot be opened or read.
pub fn count_words(path: &Path) -> Result<usize> {
    let bytes = fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decode_text(&bytes).split_whitespace().count())
}

/// Decode bytes as UTF-8, dropping invalid sequences.
///
/// Dropped rather than replaced: a replacement character would turn corrupted
/// bytes inside a whitespace run into a token of its own.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
            }
            Cow::Owned(text)
        }
    }
}
