mod commands;
mod terminal;

use commands::{CommandLine, Commands, calc, greet, lists, run};
use primer_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command() {
        Commands::Run(args) => run::run(&args.numbers, &cfg).await?,
        Commands::Lists(args) => lists::lists(&args.numbers, &cfg)?,
        Commands::Calc { operands } => calc::calc(&operands, &cfg)?,
        Commands::Greet => greet::greet(&cfg).await,
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
