use {
    anyhow::{Result, bail},
    binance_sdk::{
        config::ConfigurationRestApi,
        errors::{self, ConnectorError as connection_error},
        spot::{
            SpotRestApi,
            rest_api::{KlinesIntervalEnum, KlinesItemInner, KlinesParams, RestApi},
        },
    },
    std::{collections::HashSet, convert::TryFrom, error::Error, fmt},
};

use crate::{
    config::{
        BINANCE, BaseVol, BinanceApiConfig, ClosePrice, HighPrice, LowPrice, OpenPrice, QuoteVol,
    },
    domain::{Candle, PairInterval},
    utils::TimeUtils,
};

pub fn try_interval_from_ms(ms: i64) -> Result<KlinesIntervalEnum, String> {
    use TimeUtils as T;
    match ms {
        T::MS_IN_MIN => Ok(KlinesIntervalEnum::Interval1m),
        T::MS_IN_5_MIN => Ok(KlinesIntervalEnum::Interval5m),
        T::MS_IN_15_MIN => Ok(KlinesIntervalEnum::Interval15m),
        T::MS_IN_H => Ok(KlinesIntervalEnum::Interval1h),
        T::MS_IN_4_H => Ok(KlinesIntervalEnum::Interval4h),
        _ => Err(format!("Unsupported interval: {}ms", ms)),
    }
}

#[derive(Debug, PartialOrd, PartialEq)]
pub struct BNKline {
    pub open_timestamp_ms: i64,
    pub open_price: Option<OpenPrice>,
    pub high_price: Option<HighPrice>,
    pub low_price: Option<LowPrice>,
    pub close_price: Option<ClosePrice>,
    pub base_asset_volume: Option<BaseVol>,
    pub quote_asset_volume: Option<QuoteVol>,
}

#[derive(Debug)]
pub enum BNKlineError {
    InvalidLength,
    InvalidType(String),
    ConnectionFailed(String),
}

impl fmt::Display for BNKlineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            BNKlineError::InvalidLength => write!(f, "Invalid length"),
            BNKlineError::InvalidType(string) => write!(f, "Invalid type: {}", string),
            BNKlineError::ConnectionFailed(msg) => {
                write!(f, "Binance API connection failed: {}.", msg)
            }
        }
    }
}

impl Error for BNKlineError {}

fn convert_kline_item_inner_enum_string_to_float(kline: Option<KlinesItemInner>) -> Option<f64> {
    kline.and_then(|inner| {
        if let KlinesItemInner::String(s) = inner {
            s.parse::<f64>().ok()
        } else {
            None
        }
    })
}

impl TryFrom<Vec<KlinesItemInner>> for BNKline {
    type Error = BNKlineError;

    fn try_from(vec_inner_klines: Vec<KlinesItemInner>) -> Result<Self, Self::Error> {
        debug_assert_eq!(12, vec_inner_klines.len());

        let mut items = vec_inner_klines.into_iter();
        let open_timestamp_ms = match items.next().ok_or(BNKlineError::InvalidLength)? {
            KlinesItemInner::Integer(a) => a,
            _ => return Err(BNKlineError::InvalidType("open_time".to_string())),
        };

        let open_price = convert_kline_item_inner_enum_string_to_float(items.next());
        let high_price = convert_kline_item_inner_enum_string_to_float(items.next());
        let low_price = convert_kline_item_inner_enum_string_to_float(items.next());
        let close_price = convert_kline_item_inner_enum_string_to_float(items.next());
        let volume = convert_kline_item_inner_enum_string_to_float(items.next());
        let _ = items.next(); // close_time, unused
        let quote_asset_volume = convert_kline_item_inner_enum_string_to_float(items.next());

        Ok(BNKline {
            open_timestamp_ms,
            open_price: open_price.map(OpenPrice::new),
            high_price: high_price.map(HighPrice::new),
            low_price: low_price.map(LowPrice::new),
            close_price: close_price.map(ClosePrice::new),
            base_asset_volume: volume.map(BaseVol::new),
            quote_asset_volume: quote_asset_volume.map(QuoteVol::new),
        })
    }
}

fn convert_klines(data: Vec<Vec<KlinesItemInner>>) -> Result<Vec<BNKline>, BNKlineError> {
    data.into_iter().map(Vec::try_into).collect()
}

/// Builds the spot REST client. Callers own the handle and pass it into
/// `BinanceProvider`; nothing in this crate holds connection state globally.
pub fn build_rest_client() -> Result<RestApi, anyhow::Error> {
    let config = BinanceApiConfig::default();
    let rest_conf = ConfigurationRestApi::builder()
        .timeout(config.timeout_ms)
        .retries(config.retries)
        .backoff(config.backoff_ms)
        .build()?;
    // Create the Spot REST API client
    let rest_client = SpotRestApi::production(rest_conf);
    Ok(rest_client)
}

async fn fetch_binance_klines(
    rest_client: &RestApi,
    params: KlinesParams,
    pair_interval: &PairInterval,
) -> Result<Vec<Vec<KlinesItemInner>>, anyhow::Error> {
    let response_result = rest_client.klines(params).await;
    match response_result {
        Ok(r) => {
            let data = r.data().await?;
            Ok(data)
        }
        Err(e) => {
            if let Some(conn_err) = e.downcast_ref::<errors::ConnectorError>() {
                match conn_err {
                    connection_error::ConnectorClientError(msg) => {
                        log::error!(
                            "{} Client error: Check your request parameters. {}",
                            pair_interval,
                            msg
                        );
                    }
                    connection_error::TooManyRequestsError(msg) => {
                        log::warn!(
                            "{} Rate limit exceeded. Please wait and try again. {}",
                            pair_interval,
                            msg
                        );
                    }
                    connection_error::RateLimitBanError(msg) => {
                        log::error!(
                            "{} IP address banned due to excessive rate limits. {}",
                            pair_interval,
                            msg
                        );
                    }
                    errors::ConnectorError::ServerError { msg, status_code } => {
                        log::error!(
                            "{} Server error: {} (status code: {:?})",
                            pair_interval,
                            msg,
                            status_code
                        );
                    }
                    errors::ConnectorError::NetworkError(msg) => {
                        log::error!(
                            "{} Network error: Check your internet connection. {}",
                            pair_interval,
                            msg
                        );
                    }
                    other => {
                        log::error!("Unexpected ConnectionError variant: {:?}", other);
                    }
                }
                Err(
                    anyhow::Error::new(BNKlineError::ConnectionFailed(conn_err.to_string()))
                        .context(format!("Binance API call failed for {}", pair_interval)),
                )
            } else {
                log::error!("An unexpected error occurred for {}: {:#}", pair_interval, e);
                Err(
                    anyhow::Error::new(BNKlineError::ConnectionFailed(e.to_string())).context(
                        format!("Unexpected error during API call for {}", pair_interval),
                    ),
                )
            }
        }
    }
}

/// Fetches the most recent research window (oldest first). The window is
/// one request wide, so there is no pagination to manage.
pub async fn load_recent_klines(
    rest_client: &RestApi,
    pair_interval: &PairInterval,
) -> Result<Vec<BNKline>, anyhow::Error> {
    let params = KlinesParams::builder(
        pair_interval.bn_name().to_string(),
        try_interval_from_ms(pair_interval.interval_ms)
            .map_err(|e| anyhow::anyhow!("{}: {}", pair_interval, e))?,
    )
    .limit(BINANCE.limits.fetch_window)
    .build()?;

    let new_klines = fetch_binance_klines(rest_client, params, pair_interval).await?;
    let klines = convert_klines(new_klines).map_err(|e| {
        anyhow::Error::new(e).context(format!("{} convert_klines failed", pair_interval))
    })?;

    if klines.is_empty() {
        bail!("{}: exchange returned zero klines (unexpected).", pair_interval);
    }

    if has_duplicate_kline_open_time(&klines) {
        bail!(
            "has_duplicate_kline_open_time() failed for {} so bailing load_recent_klines()!",
            pair_interval
        );
    }

    Ok(klines)
}

fn has_duplicate_kline_open_time(klines: &[BNKline]) -> bool {
    let mut seen_ids = HashSet::new();
    for kline in klines {
        if !seen_ids.insert(kline.open_timestamp_ms) {
            return true;
        }
    }
    false
}

impl From<BNKline> for Candle {
    fn from(bn: BNKline) -> Self {
        Candle::new(
            bn.open_timestamp_ms,
            bn.open_price.unwrap_or_default(),
            bn.high_price.unwrap_or_default(),
            bn.low_price.unwrap_or_default(),
            bn.close_price.unwrap_or_default(),
            bn.base_asset_volume.unwrap_or_default(),
            bn.quote_asset_volume.unwrap_or_default(),
        )
    }
}
