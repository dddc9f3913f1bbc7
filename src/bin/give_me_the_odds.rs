use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use navicomputer::repository::SqliteRouteSource;
use navicomputer::services::OnboardComputer;

#[derive(Parser)]
#[command(name = "give-me-the-odds")]
#[command(about = "Compute the Millennium Falcon's odds of evading the Empire")]
struct Cli {
    /// Path to millennium-falcon.json
    millennium_falcon: PathBuf,

    /// Path to empire.json
    empire: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut computer = OnboardComputer::new(SqliteRouteSource::new());
    computer
        .load_millennium_falcon(&cli.millennium_falcon)
        .await
        .with_context(|| format!("failed to load {}", cli.millennium_falcon.display()))?;
    computer
        .load_empire_file(&cli.empire)
        .with_context(|| format!("failed to load {}", cli.empire.display()))?;

    println!("{}", computer.compute_odds());
    Ok(())
}
