//! Plain-terminal rendering of one research pass.
//!
//! The headline metric row, the signal line and the research notes; all
//! output is a returned String so the caller decides where it goes.

use std::fmt::Write;

use crate::models::{MarketAnalysis, Signal};

pub fn render(analysis: &MarketAnalysis) -> String {
    let mut out = String::new();

    let trend_label = match analysis.is_bullish() {
        Some(true) => "BULLISH",
        Some(false) => "BEARISH",
        None => "UNKNOWN",
    };

    let _ = writeln!(out, "== Alpha Terminal == {}", analysis.pair_interval);
    let _ = writeln!(
        out,
        "LIVE PRICE: {} | TREND: {} | SENTIMENT: {} | RESEARCH TIME: {}",
        analysis.latest_price, trend_label, analysis.sentiment, analysis.research_window
    );

    match &analysis.signal {
        Signal::Buy(plan) => {
            let _ = writeln!(
                out,
                "RESEARCH BUY: Entry: {} | SL: {} | TP: {} | Estimated Duration: {}",
                plan.entry, plan.stop_loss, plan.take_profit, plan.research_window
            );
        }
        Signal::Sell(plan) => {
            let _ = writeln!(
                out,
                "RESEARCH SELL: Entry: {} | SL: {} | TP: {} | Estimated Duration: {}",
                plan.entry, plan.stop_loss, plan.take_profit, plan.research_window
            );
        }
        Signal::Neutral {
            watch_low,
            watch_high,
        } => {
            let _ = writeln!(
                out,
                "STATUS: Scanning markets... waiting for a liquidity sweep at {} or {}",
                watch_low, watch_high
            );
        }
    }

    // Research notes
    match analysis.vol_ratio {
        Some(ratio) => {
            let _ = writeln!(
                out,
                "Research time analysis: market moving at {} speed. Trade validity: {}",
                ratio, analysis.research_window
            );
        }
        None => {
            let _ = writeln!(
                out,
                "Research time analysis: volatility is degenerate, no usable estimate."
            );
        }
    }
    let _ = writeln!(out, "Golden retracement: {}", analysis.retracement);
    let _ = writeln!(
        out,
        "Liquidity cluster: {} / {}",
        analysis.liquidity.bottom, analysis.liquidity.top
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::config::{
        ANALYSIS, BaseVol, CandleResolution, ClosePrice, HighPrice, LowPrice, OpenPrice, QuoteVol,
    };
    use crate::domain::{Candle, PairInterval};
    use crate::models::PipelineStatus;

    /// A steady climb: price sits well above both the trend average and
    /// the liquidity-sweep band, so the classifier stays neutral.
    fn climbing_series() -> crate::models::OhlcvTimeSeries {
        let candles = (0..300)
            .map(|i| {
                let base = 100.0 + i as f64 * 0.1;
                Candle::new(
                    i as i64 * 900_000,
                    OpenPrice::new(base),
                    HighPrice::new(base + 1.0),
                    LowPrice::new(base - 1.0),
                    ClosePrice::new(base),
                    BaseVol::new(1.0),
                    QuoteVol::new(base),
                )
            })
            .collect();

        let pair = PairInterval {
            name: "BTCUSDT".to_string(),
            interval_ms: 900_000,
        };
        crate::models::OhlcvTimeSeries::from_candles(pair, candles)
    }

    #[test]
    fn neutral_report_names_both_watch_levels() {
        let status = analyze(&climbing_series(), CandleResolution::M15, &ANALYSIS).unwrap();
        let PipelineStatus::Ready(analysis) = status else {
            panic!("expected a ready analysis");
        };

        let text = render(&analysis);
        assert!(text.contains("LIVE PRICE: $129.9000"));
        assert!(text.contains("TREND: BULLISH"));
        assert!(text.contains("RESEARCH TIME: 25-40 Mins"));
        assert!(text.contains("waiting for a liquidity sweep"));
        assert!(text.contains("Golden retracement"));
    }
}
