use std::env;
use std::io::IsTerminal;

use ctxhelp::cli;
use ctxhelp::config::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let config = Config::from_env();
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(EnvFilter::new(config.log_filter()))
        .init();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run_with_args(&args));
}
