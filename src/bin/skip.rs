use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use skipfeed::SkipIterator;

#[derive(Parser, Debug)]
struct Args {
    /// Values to iterate over, in order
    values: Vec<String>,

    /// A value to drop once; repeat to drop more occurrences
    #[arg(long = "skip")]
    skips: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut iter = SkipIterator::new(args.values);
    for value in args.skips {
        debug!("Skipping {value}");
        iter.skip_value(value);
    }

    let output: Vec<String> = iter.collect();
    println!("{}", output.join(" "));
    Ok(())
}
