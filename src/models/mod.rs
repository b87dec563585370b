mod analysis;
mod ohlcv;
mod signal;

pub use ohlcv::{OhlcvTimeSeries, SeriesError};

pub use analysis::{
    IndicatorSet, LiquidityLevels, MarketAnalysis, NotReadyReason, PipelineStatus, SentimentSplit,
    StructureFlags,
};
pub use signal::{ResearchWindow, Signal, TradeDirection, TradePlan};
