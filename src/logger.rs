//! File logging setup
//!
//! Wires the `log` facade to a fern file dispatch when logging is enabled in
//! the config. The TUI owns the terminal, so logs never go to stdout.

use anyhow::Result;

use crate::config::LoggingConfig;

/// Initialize logging per the config. A disabled config is a no-op and log
/// macros throughout the crate fall through to the default black hole.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(config.file.clone())?)
        .apply()?;

    log::info!("logging initialized");
    Ok(())
}
