use std::time::Duration;

pub const DEFAULT_DELAY_MS: u64 = 100;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(DEFAULT_DELAY_MS);
pub const DEFAULT_THRESHOLD: i64 = 3;

pub struct Config {
    /// Skips the banner printed before any output.
    pub no_banner: bool,

    /// 0 prints everything, 1 hides banner and headers, 2 also hides the closing separator.
    pub quiet: u8,

    /// How long the greeting routine suspends before printing.
    pub delay: Duration,

    /// Elements strictly greater than this survive the filter.
    pub threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            delay: DEFAULT_DELAY,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
