// Analysis algorithms: the research pipeline and its pure transforms
pub mod indicators;
pub mod liquidity;
pub mod pipeline;
pub mod research_time;
pub mod signal;
pub mod structure;

pub use indicators::compute_indicator_set;
pub use liquidity::{liquidity_levels, retracement_level};
pub use pipeline::analyze;
pub use research_time::{estimate_research_window, volatility_ratio};
pub use signal::evaluate_signal;
pub use structure::detect_structure;
