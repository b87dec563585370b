use anyhow::Result;
use async_trait::async_trait;
use binance_sdk::spot::rest_api::RestApi;

use crate::data::bn_kline::load_recent_klines;
use crate::domain::{Candle, PairInterval};

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the most recent research window for a pair, oldest candle first.
    async fn fetch_recent_candles(&self, pair: &str, interval_ms: i64) -> Result<Vec<Candle>>;
}

/// Binance-backed provider. The REST client is built by the caller (see
/// `build_rest_client`) and injected here, so its lifecycle is owned
/// outside the pipeline and no process-wide connection state exists.
pub struct BinanceProvider {
    rest_client: RestApi,
}

impl BinanceProvider {
    pub fn new(rest_client: RestApi) -> Self {
        Self { rest_client }
    }
}

#[async_trait]
impl MarketDataProvider for BinanceProvider {
    async fn fetch_recent_candles(&self, pair: &str, interval_ms: i64) -> Result<Vec<Candle>> {
        let pair_interval = PairInterval {
            name: pair.into(),
            interval_ms,
        };

        let klines = load_recent_klines(&self.rest_client, &pair_interval).await?;

        // Convert using the From impl
        let candles: Vec<Candle> = klines.into_iter().map(|bn_kline| bn_kline.into()).collect();

        Ok(candles)
    }
}
