use league_server::cli::Cli;
use league_server::config::Config;
use league_server::store::FileSystemPlayerStore;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("league_server=info"));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let store = FileSystemPlayerStore::open(&config.db_path)?;

    println!("Let's play poker");
    println!("Type \"{{Name}} wins\" to record a win");

    let mut cli = Cli::new(store, BufReader::new(tokio::io::stdin()));
    let recorded = cli.run().await?;
    info!(recorded, "Scorekeeping finished");
    Ok(())
}
