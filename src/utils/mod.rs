mod perf;
pub mod time_utils;

pub use time_utils::{AppInstant, TimeUtils, epoch_ms_to_naive, naive_to_epoch_ms};
