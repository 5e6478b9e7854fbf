use clap::Parser;

use hostfacts::{collect, Config, Fact, FactStore, HostSampler, Result};

/// Log current machine health facts to the database.
#[derive(Parser)]
#[command(name = "hostfacts")]
struct Cli {
    /// Abort on the first failing fact instead of aggregating failures
    #[arg(long)]
    raise: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let store = FactStore::connect(&config.dsn).await?;
    let facts = Fact::enabled(config.remote.is_some());
    let sampler = HostSampler::new(config.remote);

    collect(&facts, &sampler, &store, cli.raise).await
}
