//! Strong value types for prices, volumes and derived indicator readings.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};
use strum_macros::EnumIter;

use crate::utils::TimeUtils;

/// Candle interval selectable from the command line.
/// Granularity (sub-hour or not) is the only thing the research-time
/// estimator reads from this.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default, clap::ValueEnum,
)]
pub enum CandleResolution {
    #[value(name = "1m")]
    M1,
    #[value(name = "5m")]
    M5,
    #[default]
    #[value(name = "15m")]
    M15,
    #[value(name = "1h")]
    H1,
    #[value(name = "4h")]
    H4,
}

impl CandleResolution {
    pub fn interval_ms(&self) -> i64 {
        match self {
            Self::M1 => TimeUtils::MS_IN_MIN,
            Self::M5 => TimeUtils::MS_IN_5_MIN,
            Self::M15 => TimeUtils::MS_IN_15_MIN,
            Self::H1 => TimeUtils::MS_IN_H,
            Self::H4 => TimeUtils::MS_IN_4_H,
        }
    }

    /// Sub-hour candles anchor the research-time estimate to the short base;
    /// hour-or-larger candles anchor it to the macro base.
    pub fn is_sub_hour(&self) -> bool {
        self.interval_ms() < TimeUtils::MS_IN_H
    }
}

impl std::fmt::Display for CandleResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::M1 => write!(f, "1m"),
            Self::M5 => write!(f, "5m"),
            Self::M15 => write!(f, "15m"),
            Self::H1 => write!(f, "1h"),
            Self::H4 => write!(f, "4h"),
        }
    }
}

/// Wilder-smoothed true range: typical price movement per candle, in quote
/// currency. Zero is legal (a dead-flat market) and must be guarded by the
/// consumer, not hidden here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VolRange(f64);

impl VolRange {
    pub(crate) const MIN_EPSILON: f64 = 1e-12;

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Scales the range by a policy multiplier (stop/target/band widths).
    #[inline]
    pub(crate) fn scaled(self, mult: f64) -> f64 {
        self.0 * mult
    }
}

impl std::fmt::Display for VolRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Momentum oscillator reading, clamped to [0, 100] at construction so an
/// out-of-range value cannot exist anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RsiPct(f64);

impl RsiPct {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 100.0 {
            100.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for RsiPct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Current volatility range relative to its mean over the held window.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VolRatio(f64);

impl VolRatio {
    pub(crate) const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Ratio of the latest range to the window mean. A degenerate flat
    /// market (mean ~ 0) has no meaningful ratio and yields None; callers
    /// must surface that as "undefined", never substitute a neutral 1.0.
    pub(crate) fn calculate(latest: f64, mean: f64) -> Option<Self> {
        if mean > VolRange::MIN_EPSILON {
            Some(Self::new(latest / mean))
        } else {
            None
        }
    }
}

impl std::fmt::Display for VolRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}x", self.0)
    }
}

/// A behavioral contract for anything that behaves like a price.
pub trait PriceLike {
    fn value(&self) -> f64;

    const MIN_EPSILON: f64 = 1e-12;

    fn is_positive(&self) -> bool {
        self.value() > Self::MIN_EPSILON
    }

    /// Formats a price with "Trader Precision" adaptive decimals.
    fn format_price(&self) -> String {
        let price = self.value();
        if price == 0.0 {
            return "$0.00".to_string();
        }

        // Determine magnitude
        let abs_price = price.abs();

        if abs_price >= 1000.0 {
            format!("${:.2}", price)
        } else if abs_price >= 1.0 {
            format!("${:.4}", price)
        } else if abs_price >= 0.01 {
            format!("${:.5}", price)
        } else {
            format!("${:.8}", price)
        }
    }
}

macro_rules! impl_into_price {
    ($from:ident) => {
        impl From<$from> for Price {
            fn from(p: $from) -> Self {
                Price::new(p.value())
            }
        }
    };
}

macro_rules! define_price_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name::new(v)
            }
        }

        impl $name {
            pub const fn new(val: f64) -> Self {
                // Absolute prices should not be negative
                let v = if val < 0.0 { 0.0 } else { val };
                Self(v)
            }
        }

        impl Add<f64> for $name {
            type Output = $name;

            fn add(self, rhs: f64) -> Self::Output {
                $name::new(self.value() + rhs)
            }
        }

        impl Sub<f64> for $name {
            type Output = $name;

            fn sub(self, rhs: f64) -> Self::Output {
                $name::new(self.value() - rhs)
            }
        }

        impl Sub for $name {
            type Output = f64;

            fn sub(self, rhs: Self) -> Self::Output {
                self.value() - rhs.value()
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;

            fn mul(self, rhs: f64) -> Self::Output {
                $name::new(self.value() * rhs)
            }
        }

        impl PriceLike for $name {
            fn value(&self) -> f64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.format_price())
            }
        }
    };
}

macro_rules! impl_price_compare {
    ($a:ty, $b:ty) => {
        impl PartialEq<$b> for $a {
            fn eq(&self, other: &$b) -> bool {
                self.value() == other.value()
            }
        }

        impl PartialOrd<$b> for $a {
            fn partial_cmp(&self, other: &$b) -> Option<std::cmp::Ordering> {
                self.value().partial_cmp(&other.value())
            }
        }
    };
}

// Generate the Price Hierarchy
define_price_type!(Price);
define_price_type!(OpenPrice);
define_price_type!(HighPrice);
define_price_type!(LowPrice);
define_price_type!(ClosePrice);
define_price_type!(StopPrice);
define_price_type!(TargetPrice);

impl_into_price!(OpenPrice);
impl_into_price!(HighPrice);
impl_into_price!(LowPrice);
impl_into_price!(ClosePrice);
impl_into_price!(StopPrice);
impl_into_price!(TargetPrice);

impl_price_compare!(LowPrice, HighPrice);
impl_price_compare!(HighPrice, LowPrice);

impl_price_compare!(ClosePrice, Price);
impl_price_compare!(Price, ClosePrice);
impl_price_compare!(ClosePrice, LowPrice);
impl_price_compare!(ClosePrice, HighPrice);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BaseVol(f64);

impl BaseVol {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for BaseVol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.8}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct QuoteVol(f64);

impl QuoteVol {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for QuoteVol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = self.0;
        if val >= 1_000_000.0 {
            write!(f, "{:.1}M", val / 1_000_000.0)
        } else if val >= 1_000.0 {
            write!(f, "{:.0}K", val / 1_000.0)
        } else {
            write!(f, "{:.0}", val)
        }
    }
}
