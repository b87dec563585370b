//! Standalone money-flow screener.
//!
//! Not part of the research pipeline: given a 24h ticker snapshot it keeps
//! the quoted pairs with real turnover and ranks the strongest movers.

use {
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{cmp::Ordering, collections::HashMap, path::Path},
    tabled::Tabled,
};

use crate::config::{QuoteVol, constants::screener};

/// One instrument's 24h ticker statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerStats {
    pub symbol: String,
    /// Percent change over the last 24h
    pub change_pct: f64,
    /// Quote currency traded over the last 24h
    pub quote_volume: QuoteVol,
}

#[derive(Tabled)]
pub struct ScreenerRow {
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    #[tabled(rename = "Change %")]
    pub change_pct: String,
    #[tabled(rename = "Volume")]
    pub volume: String,
}

impl From<&TickerStats> for ScreenerRow {
    fn from(stats: &TickerStats) -> Self {
        Self {
            symbol: stats.symbol.clone(),
            change_pct: format!("{:+.2}", stats.change_pct),
            volume: stats.quote_volume.to_string(),
        }
    }
}

/// Filter and rank: quote-asset pairs with 24h turnover above the floor,
/// strongest movers first, capped to the top handful.
pub fn rank_by_money_flow(stats: &[TickerStats]) -> Vec<TickerStats> {
    let mut flowing: Vec<TickerStats> = stats
        .iter()
        .filter(|s| s.symbol.ends_with(screener::QUOTE_ASSET))
        .filter(|s| s.quote_volume.value() > screener::MIN_QUOTE_VOLUME)
        .cloned()
        .collect();

    flowing.sort_by(|a, b| {
        b.change_pct
            .partial_cmp(&a.change_pct)
            .unwrap_or(Ordering::Equal)
    });
    flowing.truncate(screener::TOP_N);
    flowing
}

/// Loads a ticker snapshot: a JSON mapping of symbol -> 24h stats, in the
/// exchange's ticker field names.
pub fn load_snapshot(path: &Path) -> Result<Vec<TickerStats>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read ticker snapshot {:?}", path))?;
    parse_snapshot(&raw)
}

pub fn parse_snapshot(raw: &str) -> Result<Vec<TickerStats>> {
    #[derive(Deserialize)]
    struct RawStats {
        percentage: f64,
        #[serde(rename = "quoteVolume")]
        quote_volume: f64,
    }

    let map: HashMap<String, RawStats> =
        serde_json::from_str(raw).context("malformed ticker snapshot")?;

    Ok(map
        .into_iter()
        .map(|(symbol, s)| TickerStats {
            symbol,
            change_pct: s.percentage,
            quote_volume: QuoteVol::new(s.quote_volume),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(symbol: &str, change_pct: f64, quote_volume: f64) -> TickerStats {
        TickerStats {
            symbol: symbol.to_string(),
            change_pct,
            quote_volume: QuoteVol::new(quote_volume),
        }
    }

    #[test]
    fn thin_volume_and_foreign_quotes_are_dropped() {
        let snapshot = vec![
            stats("BTCUSDT", 2.0, 50_000_000.0),
            stats("DEADUSDT", 90.0, 5_000.0),
            stats("ETHBTC", 50.0, 50_000_000.0),
        ];

        let top = rank_by_money_flow(&snapshot);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].symbol, "BTCUSDT");
    }

    #[test]
    fn strongest_movers_come_first_capped_at_five() {
        let snapshot: Vec<TickerStats> = (0..8)
            .map(|i| stats(&format!("COIN{}USDT", i), i as f64, 20_000_000.0))
            .collect();

        let top = rank_by_money_flow(&snapshot);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].change_pct, 7.0);
        assert!(top.windows(2).all(|w| w[0].change_pct >= w[1].change_pct));
    }

    #[test]
    fn snapshot_parses_exchange_field_names() {
        let raw = r#"{
            "BTC/USDT": {"percentage": 3.1, "quoteVolume": 120000000.0},
            "ETH/USDT": {"percentage": -1.2, "quoteVolume": 80000000.0}
        }"#;

        let mut parsed = parse_snapshot(raw).unwrap();
        parsed.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].symbol, "BTC/USDT");
        assert_eq!(parsed[0].change_pct, 3.1);
        assert_eq!(parsed[1].quote_volume, QuoteVol::new(80_000_000.0));

        // Slash-style symbols still pass the quote filter
        let top = rank_by_money_flow(&parsed);
        assert_eq!(top.len(), 2);
    }
}
