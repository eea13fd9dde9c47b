// src/bin/cli.rs
use julia_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(true);
    cli::run()?;
    Ok(())
}
