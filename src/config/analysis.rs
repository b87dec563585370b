//! Analysis pipeline configuration

use serde::{Deserialize, Serialize};

use super::constants;

/// Lookbacks for the indicator engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// EMA length used for directional bias
    pub trend_lookback: usize,
    /// Wilder true-range smoothing length
    pub vol_range_lookback: usize,
    /// Wilder RSI length
    pub momentum_lookback: usize,
}

/// Where short-term order clustering is assumed to sit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiquidityConfig {
    /// Trailing candles scanned for the liquidity extremes
    pub lookback: usize,
    /// Fraction of the window's total range, measured down from the window high
    pub retracement_ratio: f64,
}

/// Fixed trigger policy for the three-state classifier.
/// The stop/target multipliers encode an ~2.5:1 reward-to-risk ratio; they
/// are policy constants, not derived values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignalPolicy {
    pub stop_loss_vol_mult: f64,
    pub take_profit_vol_mult: f64,
    /// Width of the liquidity-sweep entry band, in volatility ranges
    pub sweep_band_vol_mult: f64,
    /// RSI ceiling for longs
    pub momentum_overbought: f64,
    /// RSI floor for shorts
    pub momentum_oversold: f64,
}

/// Anchors for the volatility-scaled time-to-target estimate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResearchTimeConfig {
    /// Base estimate on sub-hour candles
    pub sub_hour_base_minutes: u32,
    /// Base estimate on hour-or-larger candles
    pub macro_base_minutes: u32,
    /// Width of the reported band when the estimate stays under an hour
    pub minute_band_minutes: u32,
    /// Width added to the upper bound before converting to hours
    pub hour_band_minutes: u32,
}

/// The Master Analysis Configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// The window must strictly exceed this many candles before any derived
    /// output is produced
    pub min_candles_for_analysis: usize,

    // Sub-groups
    pub indicators: IndicatorConfig,
    pub liquidity: LiquidityConfig,
    pub signal: SignalPolicy,
    pub research_time: ResearchTimeConfig,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    min_candles_for_analysis: constants::MIN_CANDLES_FOR_ANALYSIS,
    indicators: constants::indicators::DEFAULT,
    liquidity: constants::liquidity::DEFAULT,
    signal: constants::signal::DEFAULT,
    research_time: constants::research_time::DEFAULT,
};
