//! The three-state trigger logic.
//!
//! Re-evaluated from scratch on every pass: no memory of the previous
//! signal, no hysteresis. A long needs a bullish trend, a price still close
//! to the liquidity floor, and an oscillator that is not overbought; a
//! short is the mirror image. The trend comparison makes the two triggers
//! disjoint by construction.

use crate::config::{ClosePrice, Price, PriceLike, RsiPct, SignalPolicy, StopPrice, TargetPrice, VolRange};
use crate::models::{LiquidityLevels, ResearchWindow, Signal, TradeDirection, TradePlan};

pub fn evaluate_signal(
    price: ClosePrice,
    trend_avg: Price,
    momentum: RsiPct,
    liquidity: &LiquidityLevels,
    vol_range: VolRange,
    research_window: ResearchWindow,
    policy: &SignalPolicy,
) -> Signal {
    let sweep_band = vol_range.scaled(policy.sweep_band_vol_mult);

    let buy_trigger = price > trend_avg
        && price < liquidity.bottom + sweep_band
        && momentum.value() < policy.momentum_overbought;

    let sell_trigger = price < trend_avg
        && price > liquidity.top - sweep_band
        && momentum.value() > policy.momentum_oversold;

    if buy_trigger {
        Signal::Buy(TradePlan {
            direction: TradeDirection::Long,
            entry: price,
            stop_loss: StopPrice::new(price.value() - vol_range.scaled(policy.stop_loss_vol_mult)),
            take_profit: TargetPrice::new(
                price.value() + vol_range.scaled(policy.take_profit_vol_mult),
            ),
            research_window,
        })
    } else if sell_trigger {
        Signal::Sell(TradePlan {
            direction: TradeDirection::Short,
            entry: price,
            stop_loss: StopPrice::new(price.value() + vol_range.scaled(policy.stop_loss_vol_mult)),
            take_profit: TargetPrice::new(
                price.value() - vol_range.scaled(policy.take_profit_vol_mult),
            ),
            research_window,
        })
    } else {
        Signal::Neutral {
            watch_low: liquidity.bottom,
            watch_high: liquidity.top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HighPrice, LowPrice, constants};

    fn policy() -> SignalPolicy {
        constants::signal::DEFAULT
    }

    fn levels(bottom: f64, top: f64) -> LiquidityLevels {
        LiquidityLevels {
            top: HighPrice::new(top),
            bottom: LowPrice::new(bottom),
        }
    }

    const WINDOW: ResearchWindow = ResearchWindow::Minutes { lo: 25, hi: 40 };

    #[test]
    fn buy_near_the_liquidity_floor_in_an_uptrend() {
        // Price just above trend, just above the floor, oscillator mild.
        let signal = evaluate_signal(
            ClosePrice::new(100.5),
            Price::new(100.0),
            RsiPct::new(55.0),
            &levels(100.0, 120.0),
            VolRange::new(1.0),
            WINDOW,
            &policy(),
        );

        let Signal::Buy(plan) = signal else {
            panic!("expected a buy, got {:?}", signal);
        };
        assert_eq!(plan.direction, TradeDirection::Long);
        assert_eq!(plan.entry, ClosePrice::new(100.5));
        // Exact policy distances: 1.8 and 4.5 volatility ranges
        assert_eq!(plan.stop_loss, StopPrice::new(100.5 - 1.8));
        assert_eq!(plan.take_profit, TargetPrice::new(100.5 + 4.5));
        assert_eq!(plan.research_window, WINDOW);
    }

    #[test]
    fn sell_near_the_liquidity_ceiling_in_a_downtrend() {
        let signal = evaluate_signal(
            ClosePrice::new(119.5),
            Price::new(120.0),
            RsiPct::new(45.0),
            &levels(100.0, 120.0),
            VolRange::new(1.0),
            WINDOW,
            &policy(),
        );

        let Signal::Sell(plan) = signal else {
            panic!("expected a sell, got {:?}", signal);
        };
        assert_eq!(plan.stop_loss, StopPrice::new(119.5 + 1.8));
        assert_eq!(plan.take_profit, TargetPrice::new(119.5 - 4.5));
    }

    #[test]
    fn overbought_oscillator_blocks_the_buy() {
        let signal = evaluate_signal(
            ClosePrice::new(100.5),
            Price::new(100.0),
            RsiPct::new(65.0),
            &levels(100.0, 120.0),
            VolRange::new(1.0),
            WINDOW,
            &policy(),
        );
        assert!(!signal.is_directional());
    }

    #[test]
    fn price_far_from_both_levels_is_neutral() {
        let signal = evaluate_signal(
            ClosePrice::new(110.0),
            Price::new(100.0),
            RsiPct::new(50.0),
            &levels(100.0, 120.0),
            VolRange::new(1.0),
            WINDOW,
            &policy(),
        );

        assert_eq!(
            signal,
            Signal::Neutral {
                watch_low: LowPrice::new(100.0),
                watch_high: HighPrice::new(120.0),
            }
        );
    }

    #[test]
    fn buy_and_sell_never_fire_together() {
        // Sweep a grid of prices across trend and both liquidity levels;
        // count how often each trigger would fire on the same input.
        let liquidity = levels(98.0, 102.0);
        let policy = policy();
        let vol = VolRange::new(2.0);

        for price_cents in 9_000..11_000 {
            let price = ClosePrice::new(price_cents as f64 / 100.0);
            for rsi in [0.0, 30.0, 45.0, 55.0, 70.0, 100.0] {
                let buy = price > Price::new(100.0)
                    && price < liquidity.bottom + vol.scaled(policy.sweep_band_vol_mult)
                    && rsi < policy.momentum_overbought;
                let sell = price < Price::new(100.0)
                    && price > liquidity.top - vol.scaled(policy.sweep_band_vol_mult)
                    && rsi > policy.momentum_oversold;
                assert!(!(buy && sell), "both triggers at price {}", price);

                let signal = evaluate_signal(
                    price,
                    Price::new(100.0),
                    RsiPct::new(rsi),
                    &liquidity,
                    vol,
                    WINDOW,
                    &policy,
                );
                match signal {
                    Signal::Buy(_) => assert!(buy),
                    Signal::Sell(_) => assert!(sell),
                    Signal::Neutral { .. } => assert!(!buy && !sell),
                }
            }
        }
    }
}
