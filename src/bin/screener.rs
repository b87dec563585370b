use anyhow::Result;
use clap::Parser;
use tabled::Table;

use alpha_terminal::screener::{ScreenerRow, load_snapshot, rank_by_money_flow};

#[derive(Parser, Debug)]
#[command(author, version, about = "Money-flow screener over a 24h ticker snapshot", long_about = None)]
struct ScreenerCli {
    /// Path to a ticker snapshot (JSON mapping of symbol -> 24h stats)
    #[arg(long)]
    snapshot: std::path::PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = ScreenerCli::parse();

    let stats = load_snapshot(&args.snapshot)?;
    log::info!("Loaded {} tickers from {:?}", stats.len(), args.snapshot);

    let top = rank_by_money_flow(&stats);
    if top.is_empty() {
        log::warn!("No pairs passed the money-flow filter.");
        return Ok(());
    }

    let rows: Vec<ScreenerRow> = top.iter().map(ScreenerRow::from).collect();
    println!("--- Money Flow Screener ---");
    println!("{}", Table::new(rows));

    Ok(())
}
