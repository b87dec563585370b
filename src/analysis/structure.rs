//! Structural pattern flags: fair-value gaps and swing points.
//!
//! Stateless and unsmoothed; each candle's flags depend only on that candle
//! and its immediate predecessors.

use crate::models::{OhlcvTimeSeries, StructureFlags};

pub fn detect_structure(ts: &OhlcvTimeSeries) -> StructureFlags {
    let n = ts.klines();

    let mut gap_up = vec![None; n];
    let mut gap_down = vec![None; n];
    let mut higher_high = vec![None; n];
    let mut lower_low = vec![None; n];

    for i in 0..n {
        if i >= 1 {
            higher_high[i] = Some(ts.high_prices[i] > ts.high_prices[i - 1]);
            lower_low[i] = Some(ts.low_prices[i] < ts.low_prices[i - 1]);
        }

        // A three-candle imbalance: candle i's range never overlaps the
        // range two candles back.
        if i >= 2 {
            gap_up[i] = Some(ts.low_prices[i] > ts.high_prices[i - 2]);
            gap_down[i] = Some(ts.high_prices[i] < ts.low_prices[i - 2]);
        }
    }

    StructureFlags {
        gap_up,
        gap_down,
        higher_high,
        lower_low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseVol, ClosePrice, HighPrice, LowPrice, OpenPrice, QuoteVol};
    use crate::domain::{Candle, PairInterval};

    fn series(rows: &[(f64, f64)]) -> OhlcvTimeSeries {
        let candles = rows
            .iter()
            .enumerate()
            .map(|(i, &(high, low))| {
                let mid = (high + low) / 2.0;
                Candle::new(
                    i as i64 * 60_000,
                    OpenPrice::new(mid),
                    HighPrice::new(high),
                    LowPrice::new(low),
                    ClosePrice::new(mid),
                    BaseVol::new(1.0),
                    QuoteVol::new(mid),
                )
            })
            .collect();

        let pair = PairInterval {
            name: "BTCUSDT".to_string(),
            interval_ms: 60_000,
        };
        OhlcvTimeSeries::from_candles(pair, candles)
    }

    #[test]
    fn early_candles_have_no_flags() {
        let flags = detect_structure(&series(&[(101.0, 99.0), (102.0, 100.0), (103.0, 101.0)]));

        assert_eq!(flags.gap_up[0], None);
        assert_eq!(flags.gap_up[1], None);
        assert_eq!(flags.gap_down[1], None);
        assert_eq!(flags.higher_high[0], None);
        assert_eq!(flags.lower_low[0], None);

        assert_eq!(flags.higher_high[1], Some(true));
        assert_eq!(flags.gap_up[2], Some(false));
    }

    #[test]
    fn bullish_gap_when_low_clears_older_high() {
        // Candle 2's low (105) sits above candle 0's high (101).
        let flags = detect_structure(&series(&[
            (101.0, 99.0),
            (104.0, 100.0),
            (107.0, 105.0),
        ]));

        assert_eq!(flags.gap_up[2], Some(true));
        // Other flags at the same candle are untouched by the gap
        assert_eq!(flags.gap_down[2], Some(false));
        assert_eq!(flags.higher_high[2], Some(true));
        assert_eq!(flags.lower_low[2], Some(false));
    }

    #[test]
    fn bearish_gap_when_high_stays_under_older_low() {
        let flags = detect_structure(&series(&[
            (101.0, 99.0),
            (98.0, 95.0),
            (93.0, 91.0),
        ]));

        assert_eq!(flags.gap_down[2], Some(true));
        assert_eq!(flags.gap_up[2], Some(false));
        assert_eq!(flags.lower_low[2], Some(true));
    }

    #[test]
    fn rising_highs_flag_every_candle_after_the_first() {
        let rows: Vec<(f64, f64)> = (0..20).map(|i| (101.0 + i as f64, 99.0 + i as f64)).collect();
        let flags = detect_structure(&series(&rows));

        assert!(flags.higher_high[1..].iter().all(|f| *f == Some(true)));
        assert!(flags.lower_low[1..].iter().all(|f| *f == Some(false)));
    }
}
