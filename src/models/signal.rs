use {
    crate::config::{ClosePrice, HighPrice, LowPrice, StopPrice, TargetPrice},
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

/// How long the research expects the move to stay valid. Hour bounds carry
/// one decimal place; `Undefined` is the degenerate-volatility outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ResearchWindow {
    Minutes { lo: u32, hi: u32 },
    Hours { lo: f64, hi: f64 },
    Undefined,
}

impl std::fmt::Display for ResearchWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResearchWindow::Minutes { lo, hi } => write!(f, "{}-{} Mins", lo, hi),
            ResearchWindow::Hours { lo, hi } => write!(f, "{:.1}-{:.1} Hours", lo, hi),
            ResearchWindow::Undefined => write!(f, "Undefined"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TradeDirection {
    #[strum(to_string = "LONG")]
    Long,
    #[strum(to_string = "SHORT")]
    Short,
}

/// Entry/exit levels for a directional signal. Built fresh on every
/// evaluation; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub direction: TradeDirection,
    pub entry: ClosePrice,
    pub stop_loss: StopPrice,
    pub take_profit: TargetPrice,
    /// Expected validity window of the plan
    pub research_window: ResearchWindow,
}

/// The classifier output. Neutral carries the two liquidity levels the
/// market is expected to sweep before a directional setup forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Signal {
    Buy(TradePlan),
    Sell(TradePlan),
    Neutral {
        watch_low: LowPrice,
        watch_high: HighPrice,
    },
}

impl Signal {
    pub fn plan(&self) -> Option<&TradePlan> {
        match self {
            Signal::Buy(plan) | Signal::Sell(plan) => Some(plan),
            Signal::Neutral { .. } => None,
        }
    }

    pub fn is_directional(&self) -> bool {
        self.plan().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minute_window_formatting() {
        let w = ResearchWindow::Minutes { lo: 59, hi: 74 };
        assert_eq!(w.to_string(), "59-74 Mins");
    }

    #[test]
    fn hour_window_formatting() {
        let w = ResearchWindow::Hours { lo: 2.0, hi: 3.0 };
        assert_eq!(w.to_string(), "2.0-3.0 Hours");
    }

    #[test]
    fn undefined_window_formatting() {
        assert_eq!(ResearchWindow::Undefined.to_string(), "Undefined");
    }
}
