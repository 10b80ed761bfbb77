// crates/cli/src/config.rs
use crate::args::Args;
pub use wordcount_engine::config::Config;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self::new(args.path)
    }
}
