use {
    crate::{
        config::{CandleResolution, ClosePrice, HighPrice, LowPrice, Price, RsiPct, VolRange, VolRatio},
        domain::PairInterval,
        models::signal::{ResearchWindow, Signal},
    },
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Per-candle indicator values, aligned 1:1 with the candle window.
/// `None` means the candle sits below the indicator's lookback and the
/// value does not exist yet (it is never substituted with zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    /// EMA of close (directional bias)
    pub trend_avg: Vec<Option<Price>>,
    /// Wilder-smoothed true range
    pub vol_range: Vec<Option<VolRange>>,
    /// Wilder RSI
    pub momentum: Vec<Option<RsiPct>>,
}

impl IndicatorSet {
    /// Latest candle's readings, present only once every lookback is
    /// satisfied.
    pub fn latest(&self) -> Option<(Price, VolRange, RsiPct)> {
        let trend = (*self.trend_avg.last()?)?;
        let vol = (*self.vol_range.last()?)?;
        let rsi = (*self.momentum.last()?)?;
        Some((trend, vol, rsi))
    }
}

/// Per-candle structural flags, aligned 1:1 with the candle window.
/// Gap flags need two predecessors, swing flags one; earlier candles are
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureFlags {
    /// Bullish imbalance: low clears the high from two candles back
    pub gap_up: Vec<Option<bool>>,
    /// Bearish imbalance: high sits under the low from two candles back
    pub gap_down: Vec<Option<bool>>,
    pub higher_high: Vec<Option<bool>>,
    pub lower_low: Vec<Option<bool>>,
}

/// Short-term order-book extremes over the trailing liquidity window,
/// snapshotted at the most recent candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidityLevels {
    pub top: HighPrice,
    pub bottom: LowPrice,
}

/// Crowd positioning read straight off the momentum oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSplit {
    pub long_pct: u32,
    pub short_pct: u32,
}

impl SentimentSplit {
    pub fn from_momentum(rsi: RsiPct) -> Self {
        let long_pct = rsi.value().round() as u32;
        Self {
            long_pct,
            short_pct: 100 - long_pct,
        }
    }
}

impl fmt::Display for SentimentSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L:{}% | S:{}%", self.long_pct, self.short_pct)
    }
}

/// Everything one pipeline pass derives from a candle window. Pure data;
/// the presentation layer reads it, nothing mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub pair_interval: PairInterval,
    pub resolution: CandleResolution,
    pub latest_price: ClosePrice,

    // Per-candle series (charting)
    pub indicators: IndicatorSet,
    pub structure: StructureFlags,

    // Scalars (overlay annotations)
    pub liquidity: LiquidityLevels,
    /// Golden-ratio retracement over the whole held window
    pub retracement: Price,
    /// None when the window's mean volatility is degenerate
    pub vol_ratio: Option<VolRatio>,

    // Headline outputs
    pub research_window: ResearchWindow,
    pub sentiment: SentimentSplit,
    pub signal: Signal,
}

impl MarketAnalysis {
    /// Directional bias of the latest price against the trend average.
    pub fn is_bullish(&self) -> Option<bool> {
        let (trend, _, _) = self.indicators.latest()?;
        Some(self.latest_price > trend)
    }
}

/// Why the pipeline declined to analyze an otherwise well-formed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotReadyReason {
    InsufficientBars { have: usize, need: usize },
}

impl fmt::Display for NotReadyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotReadyReason::InsufficientBars { have, need } => {
                write!(f, "insufficient history: {} of {} candles", have, need)
            }
        }
    }
}

/// Pipeline outcome for a well-formed window. Malformed windows and
/// upstream failures surface as errors before this type is ever built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PipelineStatus {
    Ready(Box<MarketAnalysis>),
    NotReady(NotReadyReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_splits_to_100() {
        let s = SentimentSplit::from_momentum(RsiPct::new(55.4));
        assert_eq!(s.long_pct, 55);
        assert_eq!(s.short_pct, 45);
        assert_eq!(s.to_string(), "L:55% | S:45%");
    }

    #[test]
    fn not_ready_reason_reads_well() {
        let r = NotReadyReason::InsufficientBars { have: 120, need: 201 };
        assert_eq!(r.to_string(), "insufficient history: 120 of 201 candles");
    }
}
