use anyhow::{Context, Result};
use clap::Parser;

use alpha_terminal::{
    ANALYSIS, BinanceProvider, Cli, MarketDataProvider, OhlcvTimeSeries, PairInterval,
    PipelineStatus, analyze, build_rest_client, report, utils::epoch_ms_to_date_string,
};

#[tokio::main]
async fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("alpha_terminal"), my_code_level)
        .init();

    let args = Cli::parse();
    let interval_ms = args.timeframe.interval_ms();

    log::info!("Researching {} on {} candles", args.pair, args.timeframe);

    // The caller owns the client handle; the provider only borrows its use.
    let rest_client = build_rest_client().context("failed to configure the Binance REST client")?;
    let provider = BinanceProvider::new(rest_client);

    let candles = provider
        .fetch_recent_candles(&args.pair, interval_ms)
        .await
        .with_context(|| format!("could not fetch candles for {}", args.pair))?;

    let pair_interval = PairInterval {
        name: args.pair.clone(),
        interval_ms,
    };
    let series = OhlcvTimeSeries::from_candles(pair_interval, candles);

    if let Some(&last_ts) = series.timestamps.last() {
        log::info!(
            "Fetched {} candles up to {}",
            series.klines(),
            epoch_ms_to_date_string(last_ts)
        );
    }

    match analyze(&series, args.timeframe, &ANALYSIS)? {
        PipelineStatus::Ready(analysis) => {
            print!("{}", report::render(&analysis));
        }
        PipelineStatus::NotReady(reason) => {
            log::warn!("{}: {}", args.pair, reason);
            println!("Fetching live data & researching markets... ({})", reason);
        }
    }

    Ok(())
}
