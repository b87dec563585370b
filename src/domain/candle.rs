use crate::config::{BaseVol, ClosePrice, HighPrice, LowPrice, OpenPrice, QuoteVol};

// Define the Candle struct with all its properties
#[derive(Debug, Clone)]
pub struct Candle {
    pub timestamp_ms: i64,

    pub open_price: OpenPrice,
    pub high_price: HighPrice,
    pub low_price: LowPrice,
    pub close_price: ClosePrice,

    pub base_asset_volume: BaseVol,
    pub quote_asset_volume: QuoteVol,
}

impl Candle {
    // A constructor for convenience
    pub fn new(
        timestamp_ms: i64,
        open: OpenPrice,
        high: HighPrice,
        low: LowPrice,
        close: ClosePrice,
        base_vol: BaseVol,
        quote_vol: QuoteVol,
    ) -> Self {
        Candle {
            timestamp_ms,
            open_price: open,
            high_price: high,
            low_price: low,
            close_price: close,
            base_asset_volume: base_vol,
            quote_asset_volume: quote_vol,
        }
    }
}
