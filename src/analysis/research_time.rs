//! Volatility-scaled time-to-target estimation.
//!
//! A market moving at twice its usual speed should reach a target in half
//! the usual time, so the base estimate for the timeframe is divided by the
//! volatility ratio. A window whose mean volatility is ~zero has no usable
//! ratio and the estimate is reported as undefined.

use crate::config::{CandleResolution, ResearchTimeConfig, VolRange, VolRatio};
use crate::models::{IndicatorSet, ResearchWindow};

/// Latest volatility range relative to its mean over the ready part of the
/// window. None when the window is flat enough that the mean degenerates,
/// or when no range value is ready yet.
pub fn volatility_ratio(indicators: &IndicatorSet) -> Option<VolRatio> {
    let latest = (*indicators.vol_range.last()?)?;

    let ready: Vec<f64> = indicators
        .vol_range
        .iter()
        .flatten()
        .map(|v| v.value())
        .collect();

    VolRatio::calculate(latest.value(), crate::utils::mean(&ready))
}

pub fn estimate_research_window(
    vol_ratio: Option<VolRatio>,
    resolution: CandleResolution,
    config: &ResearchTimeConfig,
) -> ResearchWindow {
    let Some(ratio) = vol_ratio else {
        return ResearchWindow::Undefined;
    };

    // A zero latest range divides to infinity; treat it like the flat case.
    if ratio.value() < VolRange::MIN_EPSILON {
        return ResearchWindow::Undefined;
    }

    let base_minutes = if resolution.is_sub_hour() {
        config.sub_hour_base_minutes
    } else {
        config.macro_base_minutes
    };

    let estimated = (base_minutes as f64 / ratio.value()).round() as u32;

    if estimated < 60 {
        ResearchWindow::Minutes {
            lo: estimated,
            hi: estimated + config.minute_band_minutes,
        }
    } else {
        ResearchWindow::Hours {
            lo: round_one_decimal(estimated as f64 / 60.0),
            hi: round_one_decimal((estimated + config.hour_band_minutes) as f64 / 60.0),
        }
    }
}

fn round_one_decimal(val: f64) -> f64 {
    (val * 10.0).round() / 10.0
}
