use {
    crate::{
        config::{BaseVol, ClosePrice, HighPrice, LowPrice, OpenPrice, PriceLike, QuoteVol},
        domain::{Candle, PairInterval},
    },
    serde::{Deserialize, Serialize},
    std::{error::Error, fmt},
};

/// The candle window held for one analysis pass. Insertion order is
/// chronological order; index i of every column refers to the same candle.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OhlcvTimeSeries {
    pub pair_interval: PairInterval,
    pub timestamps: Vec<i64>,
    pub open_prices: Vec<OpenPrice>,
    pub high_prices: Vec<HighPrice>,
    pub low_prices: Vec<LowPrice>,
    pub close_prices: Vec<ClosePrice>,
    pub base_asset_volumes: Vec<BaseVol>,
    pub quote_asset_volumes: Vec<QuoteVol>,
}

/// Rejection reasons for a malformed candle window. A window that fails
/// these checks must never reach the analysis pipeline.
#[derive(Debug, PartialEq)]
pub enum SeriesError {
    /// Timestamps must be strictly increasing
    NonMonotonicTimestamps { index: usize },
    /// Zero/negative prices make every derived ratio meaningless
    NonPositivePrice { index: usize },
    /// A candle whose high sits below its low
    InvertedRange { index: usize },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeriesError::NonMonotonicTimestamps { index } => {
                write!(f, "timestamps not strictly increasing at candle {}", index)
            }
            SeriesError::NonPositivePrice { index } => {
                write!(f, "non-positive price at candle {}", index)
            }
            SeriesError::InvertedRange { index } => {
                write!(f, "high below low at candle {}", index)
            }
        }
    }
}

impl Error for SeriesError {}

impl OhlcvTimeSeries {
    pub fn from_candles(pair_interval: PairInterval, candles: Vec<Candle>) -> Self {
        let len = candles.len();

        let mut ts_vec = Vec::with_capacity(len);
        let mut open_vec = Vec::with_capacity(len);
        let mut high_vec = Vec::with_capacity(len);
        let mut low_vec = Vec::with_capacity(len);
        let mut close_vec = Vec::with_capacity(len);
        let mut base_vec = Vec::with_capacity(len);
        let mut quote_vec = Vec::with_capacity(len);

        for c in candles {
            ts_vec.push(c.timestamp_ms);
            open_vec.push(c.open_price);
            high_vec.push(c.high_price);
            low_vec.push(c.low_price);
            close_vec.push(c.close_price);
            base_vec.push(c.base_asset_volume);
            quote_vec.push(c.quote_asset_volume);
        }

        Self {
            pair_interval,
            timestamps: ts_vec,
            open_prices: open_vec,
            high_prices: high_vec,
            low_prices: low_vec,
            close_prices: close_vec,
            base_asset_volumes: base_vec,
            quote_asset_volumes: quote_vec,
        }
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.timestamps[idx],
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
            self.base_asset_volumes[idx],
            self.quote_asset_volumes[idx],
        )
    }

    pub fn klines(&self) -> usize {
        self.close_prices.len()
    }

    pub fn latest_close(&self) -> Option<ClosePrice> {
        self.close_prices.last().copied()
    }

    /// Structural sanity of the window. Malformed input is an error the
    /// caller sees, never an empty result.
    pub fn validate(&self) -> Result<(), SeriesError> {
        for i in 0..self.klines() {
            if i > 0 && self.timestamps[i] <= self.timestamps[i - 1] {
                return Err(SeriesError::NonMonotonicTimestamps { index: i });
            }

            if !self.open_prices[i].is_positive()
                || !self.high_prices[i].is_positive()
                || !self.low_prices[i].is_positive()
                || !self.close_prices[i].is_positive()
            {
                return Err(SeriesError::NonPositivePrice { index: i });
            }

            if self.high_prices[i] < self.low_prices[i] {
                return Err(SeriesError::InvertedRange { index: i });
            }
        }

        Ok(())
    }
}
