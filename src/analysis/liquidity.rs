//! Liquidity extremes and the golden-ratio retracement.
//!
//! Liquidity levels are a short-horizon snapshot: the extreme prices over
//! the trailing lookback, where resting stop clusters are assumed to sit.
//! The retracement is the long-horizon reference, taken over the whole
//! held window. Windows shorter than the lookback are scanned in full.

use crate::config::{HighPrice, LiquidityConfig, LowPrice, Price, PriceLike};
use crate::models::{LiquidityLevels, OhlcvTimeSeries};
use crate::utils::{get_max, get_min};

/// Trailing-extreme snapshot at the most recent candle. None only for an
/// empty window.
pub fn liquidity_levels(ts: &OhlcvTimeSeries, config: &LiquidityConfig) -> Option<LiquidityLevels> {
    let n = ts.klines();
    if n == 0 {
        return None;
    }

    let start = n.saturating_sub(config.lookback);
    let highs: Vec<f64> = ts.high_prices[start..].iter().map(|p| p.value()).collect();
    let lows: Vec<f64> = ts.low_prices[start..].iter().map(|p| p.value()).collect();

    Some(LiquidityLevels {
        top: HighPrice::new(get_max(&highs)),
        bottom: LowPrice::new(get_min(&lows)),
    })
}

/// Retracement level over the entire held window:
/// `high - (high - low) * ratio`, measured from the window high.
pub fn retracement_level(ts: &OhlcvTimeSeries, ratio: f64) -> Option<Price> {
    if ts.klines() == 0 {
        return None;
    }

    let highs: Vec<f64> = ts.high_prices.iter().map(|p| p.value()).collect();
    let lows: Vec<f64> = ts.low_prices.iter().map(|p| p.value()).collect();

    let window_high = get_max(&highs);
    let window_low = get_min(&lows);

    Some(Price::new(window_high - (window_high - window_low) * ratio))
}
