use std::time::Duration;

/// Chance that the automated opponent restricts itself to captures when any exist.
pub const CAPTURE_PROBABILITY: f64 = 0.7;

pub const THINKING_DELAY: Duration = Duration::from_secs(1);

/// Automated games longer than this are scored as draws.
pub const DEFAULT_MAX_PLIES: usize = 400;
