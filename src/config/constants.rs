// Top Level Constants

/// The pipeline refuses to derive anything until the window strictly exceeds
/// this many candles. Matches the trend lookback so the EMA is always ready
/// on the latest candle.
pub const MIN_CANDLES_FOR_ANALYSIS: usize = 200;

pub mod indicators {
    use crate::config::IndicatorConfig;

    pub const TREND_LOOKBACK: usize = 200;
    pub const VOL_RANGE_LOOKBACK: usize = 14;
    pub const MOMENTUM_LOOKBACK: usize = 14;

    pub const DEFAULT: IndicatorConfig = IndicatorConfig {
        trend_lookback: TREND_LOOKBACK,
        vol_range_lookback: VOL_RANGE_LOOKBACK,
        momentum_lookback: MOMENTUM_LOOKBACK,
    };
}

pub mod liquidity {
    use crate::config::LiquidityConfig;

    pub const LOOKBACK: usize = 50;
    pub const RETRACEMENT_RATIO: f64 = 0.618;

    pub const DEFAULT: LiquidityConfig = LiquidityConfig {
        lookback: LOOKBACK,
        retracement_ratio: RETRACEMENT_RATIO,
    };
}

pub mod signal {
    use crate::config::SignalPolicy;

    pub const STOP_LOSS_VOL_MULT: f64 = 1.8;
    pub const TAKE_PROFIT_VOL_MULT: f64 = 4.5;
    pub const SWEEP_BAND_VOL_MULT: f64 = 2.0;
    pub const MOMENTUM_OVERBOUGHT: f64 = 60.0;
    pub const MOMENTUM_OVERSOLD: f64 = 40.0;

    pub const DEFAULT: SignalPolicy = SignalPolicy {
        stop_loss_vol_mult: STOP_LOSS_VOL_MULT,
        take_profit_vol_mult: TAKE_PROFIT_VOL_MULT,
        sweep_band_vol_mult: SWEEP_BAND_VOL_MULT,
        momentum_overbought: MOMENTUM_OVERBOUGHT,
        momentum_oversold: MOMENTUM_OVERSOLD,
    };
}

pub mod research_time {
    use crate::config::ResearchTimeConfig;

    pub const SUB_HOUR_BASE_MINUTES: u32 = 25;
    pub const MACRO_BASE_MINUTES: u32 = 240;
    pub const MINUTE_BAND_MINUTES: u32 = 15;
    pub const HOUR_BAND_MINUTES: u32 = 60;

    pub const DEFAULT: ResearchTimeConfig = ResearchTimeConfig {
        sub_hour_base_minutes: SUB_HOUR_BASE_MINUTES,
        macro_base_minutes: MACRO_BASE_MINUTES,
        minute_band_minutes: MINUTE_BAND_MINUTES,
        hour_band_minutes: HOUR_BAND_MINUTES,
    };
}

pub mod screener {
    /// Quote volume floor: pairs trading under this much USDT in 24h are
    /// considered dead money and dropped.
    pub const MIN_QUOTE_VOLUME: f64 = 10_000_000.0;
    pub const TOP_N: usize = 5;
    pub const QUOTE_ASSET: &str = "USDT";
}
