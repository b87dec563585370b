#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod report;
pub mod screener;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::analyze;
pub use config::{ANALYSIS, CandleResolution};
pub use data::{BinanceProvider, MarketDataProvider, build_rest_client};
pub use domain::PairInterval;
pub use models::{MarketAnalysis, OhlcvTimeSeries, PipelineStatus};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Trading pair to research (Binance spot symbol)
    #[arg(long, default_value = "BTCUSDT")]
    pub pair: String,

    /// Candle interval
    #[arg(long, value_enum, default_value_t = CandleResolution::M15)]
    pub timeframe: CandleResolution,
}
