use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::trace;

pub const GREETING: &str = "Hello from async Rust!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub message: &'static str,
    pub waited: Duration,
}

/// Suspends for `delay` without blocking the runtime, then hands back the greeting.
pub async fn delayed_greeting(delay: Duration) -> Greeting {
    let start: Instant = Instant::now();
    trace!("sleeping for {}ms", delay.as_millis());
    sleep(delay).await;

    Greeting {
        message: GREETING,
        waited: start.elapsed(),
    }
}
