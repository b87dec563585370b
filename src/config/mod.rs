//! Configuration module for the alpha-terminal application.

// Can all be private now because we have a public re-export.
mod analysis;
mod binance;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use analysis::{
    ANALYSIS, AnalysisConfig, IndicatorConfig, LiquidityConfig, ResearchTimeConfig, SignalPolicy,
};
pub use binance::{BINANCE, BinanceApiConfig};
pub use types::{
    BaseVol, CandleResolution, ClosePrice, HighPrice, LowPrice, OpenPrice, Price, PriceLike,
    QuoteVol, RsiPct, StopPrice, TargetPrice, VolRange, VolRatio,
};
