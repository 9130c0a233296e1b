use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use par_icon::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --log-level takes precedence over RUST_LOG
    cli::build_logger(cli.log_level, Env::default()).init();

    log::debug!("par-icon {}", par_icon::VERSION);

    let stdout = std::io::stdout();
    cli::run(&cli, &mut stdout.lock())
}
