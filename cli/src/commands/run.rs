use primer_common::{config::Config, sequence::NumberSequence};

use crate::commands::{greet, lists};
use crate::mprint;

pub async fn run(numbers: &NumberSequence, cfg: &Config) -> anyhow::Result<()> {
    lists::lists(numbers, cfg)?;
    mprint!();
    greet::greet(cfg).await;
    Ok(())
}
