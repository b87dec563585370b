//! The end-to-end research pass.
//!
//! A pure, re-entrant function of one candle window: validate, gate on
//! history depth, run the indicator/structure/liquidity transforms, then
//! the estimator and the trigger logic. Nothing is cached between calls
//! and concurrent calls on different windows cannot interact.

use anyhow::{Context, Result};

use crate::analysis::indicators::compute_indicator_set;
use crate::analysis::liquidity::{liquidity_levels, retracement_level};
use crate::analysis::research_time::{estimate_research_window, volatility_ratio};
use crate::analysis::signal::evaluate_signal;
use crate::analysis::structure::detect_structure;
use crate::config::{AnalysisConfig, CandleResolution};
use crate::models::{
    MarketAnalysis, NotReadyReason, OhlcvTimeSeries, PipelineStatus, SentimentSplit,
};

pub fn analyze(
    series: &OhlcvTimeSeries,
    resolution: CandleResolution,
    config: &AnalysisConfig,
) -> Result<PipelineStatus> {
    series
        .validate()
        .map_err(anyhow::Error::new)
        .with_context(|| format!("rejecting malformed window for {}", series.pair_interval))?;

    // Depth gate: the trend lookback must be satisfied on the latest candle.
    let have = series.klines();
    let need = config.min_candles_for_analysis + 1;
    if have < need {
        return Ok(PipelineStatus::NotReady(NotReadyReason::InsufficientBars {
            have,
            need,
        }));
    }

    let indicators = compute_indicator_set(series, &config.indicators);
    let structure = detect_structure(series);

    let liquidity = liquidity_levels(series, &config.liquidity)
        .context("liquidity snapshot missing past the depth gate")?;
    let retracement = retracement_level(series, config.liquidity.retracement_ratio)
        .context("retracement missing past the depth gate")?;

    let (trend_avg, vol_range, momentum) = indicators
        .latest()
        .context("indicator lookbacks exceed the configured depth gate")?;
    let latest_price = series
        .latest_close()
        .context("latest close missing past the depth gate")?;

    let vol_ratio = volatility_ratio(&indicators);
    let research_window = estimate_research_window(vol_ratio, resolution, &config.research_time);

    let signal = evaluate_signal(
        latest_price,
        trend_avg,
        momentum,
        &liquidity,
        vol_range,
        research_window,
        &config.signal,
    );

    Ok(PipelineStatus::Ready(Box::new(MarketAnalysis {
        pair_interval: series.pair_interval.clone(),
        resolution,
        latest_price,
        indicators,
        structure,
        liquidity,
        retracement,
        vol_ratio,
        research_window,
        sentiment: SentimentSplit::from_momentum(momentum),
        signal,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ANALYSIS, BaseVol, ClosePrice, HighPrice, LowPrice, OpenPrice, PriceLike, QuoteVol,
    };
    use crate::domain::{Candle, PairInterval};
    use crate::models::{ResearchWindow, Signal};

    fn candle(i: usize, open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle::new(
            i as i64 * 60_000,
            OpenPrice::new(open),
            HighPrice::new(high),
            LowPrice::new(low),
            ClosePrice::new(close),
            BaseVol::new(1.0),
            QuoteVol::new(close),
        )
    }

    fn pair() -> PairInterval {
        PairInterval {
            name: "BTCUSDT".to_string(),
            interval_ms: 60_000,
        }
    }

    /// 300 candles drifting gently upward.
    fn trending_series() -> OhlcvTimeSeries {
        let candles = (0..300)
            .map(|i| {
                let base = 100.0 + i as f64 * 0.05;
                candle(i, base, base + 1.0, base - 1.0, base)
            })
            .collect();
        OhlcvTimeSeries::from_candles(pair(), candles)
    }

    #[test]
    fn short_history_is_not_ready() {
        let candles = (0..150)
            .map(|i| candle(i, 100.0, 101.0, 99.0, 100.0))
            .collect();
        let ts = OhlcvTimeSeries::from_candles(pair(), candles);

        let status = analyze(&ts, CandleResolution::M15, &ANALYSIS).unwrap();
        assert_eq!(
            status,
            PipelineStatus::NotReady(NotReadyReason::InsufficientBars { have: 150, need: 201 })
        );
    }

    #[test]
    fn malformed_history_is_an_error_not_a_silent_skip() {
        let mut candles: Vec<Candle> = (0..300)
            .map(|i| candle(i, 100.0, 101.0, 99.0, 100.0))
            .collect();
        candles[250].timestamp_ms = 0;
        let ts = OhlcvTimeSeries::from_candles(pair(), candles);

        assert!(analyze(&ts, CandleResolution::M15, &ANALYSIS).is_err());
    }

    #[test]
    fn ready_output_is_fully_aligned() {
        let ts = trending_series();
        let status = analyze(&ts, CandleResolution::M15, &ANALYSIS).unwrap();

        let PipelineStatus::Ready(analysis) = status else {
            panic!("expected a ready analysis");
        };
        assert_eq!(analysis.indicators.trend_avg.len(), 300);
        assert_eq!(analysis.structure.gap_up.len(), 300);
        assert!(analysis.indicators.latest().is_some());
        assert!(analysis.vol_ratio.is_some());
        assert_ne!(analysis.research_window, ResearchWindow::Undefined);
    }

    #[test]
    fn flat_trend_with_constant_range_keeps_a_defined_estimate() {
        // Constant close 100, high 101, low 99: the trend is dead but the
        // per-candle range is 2, so the volatility ratio settles at 1 and
        // the estimate stays defined. With no losses anywhere the
        // oscillator pegs at 100, which rules a long out regardless of how
        // the trend average rounds against the price.
        let candles = (0..300)
            .map(|i| candle(i, 100.0, 101.0, 99.0, 100.0))
            .collect();
        let ts = OhlcvTimeSeries::from_candles(pair(), candles);

        let status = analyze(&ts, CandleResolution::M15, &ANALYSIS).unwrap();
        let PipelineStatus::Ready(analysis) = status else {
            panic!("expected a ready analysis");
        };

        assert_eq!(analysis.research_window, ResearchWindow::Minutes { lo: 25, hi: 40 });
        assert!(!matches!(analysis.signal, Signal::Buy(_)));
    }

    #[test]
    fn degenerate_volatility_reports_undefined_without_panicking() {
        // High == low == close on every candle: every true range is zero,
        // the mean volatility is zero, and the estimate must be reported
        // as undefined instead of dividing by it.
        let candles = (0..300)
            .map(|i| candle(i, 100.0, 100.0, 100.0, 100.0))
            .collect();
        let ts = OhlcvTimeSeries::from_candles(pair(), candles);

        let status = analyze(&ts, CandleResolution::M15, &ANALYSIS).unwrap();
        let PipelineStatus::Ready(analysis) = status else {
            panic!("expected a ready analysis");
        };

        assert!(analysis.vol_ratio.is_none());
        assert_eq!(analysis.research_window, ResearchWindow::Undefined);
    }

    #[test]
    fn rising_market_keeps_momentum_bounded_and_trend_rising() {
        let ts = trending_series();
        let status = analyze(&ts, CandleResolution::M15, &ANALYSIS).unwrap();
        let PipelineStatus::Ready(analysis) = status else {
            panic!("expected a ready analysis");
        };

        let trends: Vec<f64> = analysis
            .indicators
            .trend_avg
            .iter()
            .flatten()
            .map(|p| p.value())
            .collect();
        assert!(trends.windows(2).all(|w| w[1] > w[0]));

        for rsi in analysis.indicators.momentum.iter().flatten() {
            assert!(rsi.value() >= 0.0 && rsi.value() <= 100.0);
        }

        assert!(
            analysis.structure.higher_high[1..]
                .iter()
                .all(|f| *f == Some(true))
        );
    }

    #[test]
    fn identical_windows_produce_identical_output() {
        let ts = trending_series();

        let first = analyze(&ts, CandleResolution::M15, &ANALYSIS).unwrap();
        let second = analyze(&ts, CandleResolution::M15, &ANALYSIS).unwrap();

        assert_eq!(first, second);

        // Byte-identical through serialization as well.
        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b);
    }
}
