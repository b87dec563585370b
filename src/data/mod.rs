mod bn_kline;
mod provider;

pub use bn_kline::build_rest_client;
pub use provider::{BinanceProvider, MarketDataProvider};
