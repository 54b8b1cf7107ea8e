use anyhow::Result;

use dategrid::config::Config;
use dategrid::{logger, ui};

fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    ui::run_app(&config)?;

    Ok(())
}
