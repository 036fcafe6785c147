use anyhow::{Context, Result};

use crate::config::Config;

pub fn init(config: &Config) -> Result<()> {
    common::log_setup::setup_logging(&config.log_level, &config.log_dir, "smogscan")
        .context("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        image = %config.image.display(),
        "smogscan starting"
    );

    Ok(())
}
