use clap::Parser;
use std::process::ExitCode;
use wordcount_cli::args::Args;
use wordcount_cli::config::Config;
use wordcount_cli::presentation;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors exit 1 rather than clap's default 2;
            // --help and --version still exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let config = Config::from(args);

    match wordcount_engine::run(&config) {
        Ok(result) => {
            presentation::print_result(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Fatal diagnostics share stdout with the count output.
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
