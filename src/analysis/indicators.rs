//! Pure indicator math over the candle window.
//!
//! Every series is index-aligned with the window: output[i] belongs to
//! candle i, and is `None` until the indicator's lookback is satisfied.

use crate::config::{IndicatorConfig, Price, PriceLike, RsiPct, VolRange};
use crate::models::{IndicatorSet, OhlcvTimeSeries};

pub fn compute_indicator_set(ts: &OhlcvTimeSeries, config: &IndicatorConfig) -> IndicatorSet {
    let closes: Vec<f64> = ts.close_prices.iter().map(|c| c.value()).collect();

    let trend_avg = ema_series(&closes, config.trend_lookback)
        .into_iter()
        .map(|v| v.map(Price::new))
        .collect();

    let tr = true_range_series(ts);
    let vol_range = wilder_series(&tr, config.vol_range_lookback)
        .into_iter()
        .map(|v| v.map(VolRange::new))
        .collect();

    let momentum = rsi_series(&closes, config.momentum_lookback);

    IndicatorSet {
        trend_avg,
        vol_range,
        momentum,
    }
}

/// Recursive exponential smoothing: `out[i] = x[i]*gain + out[i-1]*(1-gain)`,
/// seeded with the simple average of the first `length` values. Ready from
/// index `length - 1`.
fn smooth_series(values: &[f64], length: usize, gain: f64) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if length == 0 || values.len() < length {
        return out;
    }

    let seed: f64 = values[..length].iter().sum::<f64>() / length as f64;
    out[length - 1] = Some(seed);

    let mut prev = seed;
    for i in length..values.len() {
        let smoothed = values[i] * gain + prev * (1.0 - gain);
        out[i] = Some(smoothed);
        prev = smoothed;
    }

    out
}

/// Exponential moving average, `gain = 2/(length+1)`.
fn ema_series(values: &[f64], length: usize) -> Vec<Option<f64>> {
    smooth_series(values, length, 2.0 / (length as f64 + 1.0))
}

/// Wilder smoothing, `gain = 1/length` (the traditional gain for true-range
/// and RSI averages).
fn wilder_series(values: &[f64], length: usize) -> Vec<Option<f64>> {
    smooth_series(values, length, 1.0 / length as f64)
}

/// True range per candle: the candle's own range widened by any gap from
/// the previous close. The first candle has no previous close and falls
/// back to high-low.
fn true_range_series(ts: &OhlcvTimeSeries) -> Vec<f64> {
    let n = ts.klines();
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        let high = ts.high_prices[i].value();
        let low = ts.low_prices[i].value();
        let range = high - low;

        let tr = if i == 0 {
            range
        } else {
            let prev_close = ts.close_prices[i - 1].value();
            range
                .max((high - prev_close).abs())
                .max((low - prev_close).abs())
        };

        out.push(tr);
    }

    out
}

/// Wilder RSI. The first value appears at index `length` (one prior close
/// is needed before any gain/loss exists).
fn rsi_series(closes: &[f64], length: usize) -> Vec<Option<RsiPct>> {
    let mut out = vec![None; closes.len()];
    if length == 0 || closes.len() < length + 1 {
        return out;
    }

    // Initial averages from the first `length` changes.
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=length {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += -change;
        }
    }
    avg_gain /= length as f64;
    avg_loss /= length as f64;
    out[length] = Some(rsi_from_averages(avg_gain, avg_loss));

    // Wilder's smoothing for the rest of the window.
    let length_f = length as f64;
    for i in (length + 1)..closes.len() {
        let change = closes[i] - closes[i - 1];
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };

        avg_gain = (avg_gain * (length_f - 1.0) + gain) / length_f;
        avg_loss = (avg_loss * (length_f - 1.0) + loss) / length_f;
        out[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> RsiPct {
    if avg_loss <= f64::EPSILON {
        // Wilder's convention: no losses in the window reads as 100
        return RsiPct::new(100.0);
    }

    let rs = avg_gain / avg_loss;
    RsiPct::new(100.0 - 100.0 / (1.0 + rs))
}
