use clap::Parser;
use closest_pairs::app::ClosestPairsApp;
use closest_pairs::config::{Args, RunConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = if args.interactive {
        RunConfig::prompt(&args)?
    } else {
        RunConfig::from(args)
    };
    log::debug!("{config:?}");

    ClosestPairsApp::new(config).run()?;
    Ok(())
}
