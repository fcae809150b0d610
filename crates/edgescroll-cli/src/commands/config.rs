use anyhow::{bail, Result};
use tracing::info;

use edgescroll_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(force: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if path.exists() && !force {
        bail!(
            "Configuration already exists at {}\nUse --force to overwrite it with the defaults.",
            path.display()
        );
    }

    AppConfig::default().save()?;
    info!("Wrote default configuration to {}", path.display());
    println!("{}", path.display());

    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
