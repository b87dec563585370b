mod maths_utils;
mod time_utils;

pub use time_utils::TimeUtils;
pub use time_utils::epoch_ms_to_date_string;

pub(crate) use maths_utils::{get_max, get_min, mean};
