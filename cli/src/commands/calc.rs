use primer_common::config::Config;
use primer_core::calculator::Calculator;

use crate::terminal::print;

pub fn calc(operands: &[i64], cfg: &Config) -> anyhow::Result<()> {
    print::header("calculator", cfg.quiet);

    let mut calculator: Calculator = Calculator::new();
    let Some(total) = calculator.add_all(operands)? else {
        anyhow::bail!("'calc' needs at least one operand");
    };

    print::labeled("Calculator result", total);
    print::labeled("History", format!("{:?}", calculator.history()));
    Ok(())
}
