// crates/cli/src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "wordcount",
    version = crate::VERSION,
    about = "Count the words in .md, .mdx and .txt files under a path"
)]
pub struct Args {
    /// File or directory to count words in
    #[arg(value_hint = ValueHint::AnyPath)]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_path() {
        let args = Args::try_parse_from(["wordcount", "docs"]).unwrap();
        assert_eq!(args.path, PathBuf::from("docs"));
    }

    #[test]
    fn rejects_a_missing_path() {
        assert!(Args::try_parse_from(["wordcount"]).is_err());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Args::try_parse_from(["wordcount", "a", "b"]).is_err());
    }
}
