//! Check command implementation
//!
//! Prints the resolved configuration.

use tracing::info;
use valuekit_core::format::format_braced;

use crate::config::DemoConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &DemoConfig) -> Result<()> {
    info!("Checking configuration...");
    println!("{}", describe(config));
    info!("Configuration OK");
    Ok(())
}

/// Human-readable summary of the resolved configuration
pub fn describe(config: &DemoConfig) -> String {
    let seed = config
        .seed
        .map_or_else(|| "entropy".to_string(), |s| s.to_string());
    format_braced([
        format!("seed: {}", seed),
        format!("range: [{}, {}]", config.low, config.high),
        format!("log_level: {}", config.log_level),
    ])
}
