// src/bin/cli.rs
use radio_dash::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
