use std::fs::File;
use std::io::BufReader;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use skipfeed::{parse_script, Config, FeedHandler, MiniFeed};

#[derive(Parser, Debug)]
struct Args {
    /// JSON-lines event script
    /// Ex: {"op":"post","user":1,"post":5}
    #[arg(long)]
    script: PathBuf,

    /// Overrides FEED_LIMIT from the environment, must be positive
    #[arg(long)]
    limit: Option<NonZeroUsize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = Config::load_env_config()?;
    if let Some(limit) = args.limit {
        config.feed_limit = limit;
    }

    let file = File::open(&args.script)
        .with_context(|| format!("Couldn't open {}", args.script.display()))?;
    let events = parse_script(BufReader::new(file))?;
    info!("Replaying {} events", events.len());

    let mut feed = MiniFeed::with_config(&config);
    for result in feed.replay(events) {
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}
