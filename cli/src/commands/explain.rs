//! Explain command implementation

use anyhow::Result;
use clap::Args;
use stacksift_collector::CollectorConfig;
use stacksift_filter::{compile_with, FilterOptions};
use tracing::debug;

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Pattern to explain
    pub pattern: String,

    /// Source-file extensions that make a pattern match by path suffix
    #[arg(long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,
}

pub fn run(args: ExplainArgs) -> Result<()> {
    let options = resolve_options(&args, |key| std::env::var(key).ok())?;

    match compile_with(Some(args.pattern.as_str()), &options) {
        Some(matcher) => {
            println!("pattern: {:?}", matcher.pattern());
            println!("mode:    {}", matcher.mode());
            println!("match:   {}", matcher);
        }
        None => println!("no filter: every stack is kept"),
    }

    Ok(())
}

/// Only the extension list affects how a pattern compiles, so no other
/// setting is read from the environment.
fn resolve_options<F>(args: &ExplainArgs, lookup: F) -> Result<FilterOptions>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = CollectorConfig::default();
    config.apply_extensions_env_with(lookup);
    if !args.extensions.is_empty() {
        config.source_extensions = args.extensions.clone();
    }
    config.validate()?;

    debug!("Source extensions: {:?}", config.source_extensions);
    Ok(config.filter_options())
}
