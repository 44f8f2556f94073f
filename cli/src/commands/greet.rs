use primer_common::config::Config;
use primer_core::greeting::{self, Greeting};
use tracing::debug;

use crate::terminal::print;

pub async fn greet(cfg: &Config) {
    print::header("async greeting", cfg.quiet);

    let greeting: Greeting = greeting::delayed_greeting(cfg.delay).await;
    debug!("greeting ready after {:.3}s", greeting.waited.as_secs_f64());
    print::highlight(greeting.message);
}
