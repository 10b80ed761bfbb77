// crates/cli/src/presentation.rs
use wordcount_engine::stats::{RunResult, TargetKind};

/// Print skip diagnostics followed by the final count line.
///
/// Everything goes to stdout: skipped files are part of the tool's normal
/// output and do not affect the exit status.
pub fn print_result(result: &RunResult) {
    for (path, err) in &result.skipped {
        println!("Skipping {}: {err}", path.display());
    }

    match result.kind {
        TargetKind::File => {
            println!("Word count in {}: {}", result.root.display(), result.words);
        }
        TargetKind::Directory => {
            println!(
                "Total word count in {}: {}",
                result.root.display(),
                result.words
            );
        }
    }
}
