//! Configuration loading
//!
//! Parses the embedded watch.toml with the no_std parser from
//! chronoface-core. Falls back to defaults if parsing fails.

use defmt::*;

use chronoface_core::config::{parse_config, WatchConfig};

/// Parse the embedded configuration
///
/// The build script validates watch.toml, so failure here means the two
/// parsers disagree.
pub fn load(source: &str) -> WatchConfig {
    match parse_config(source) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            warn!("Using default configuration");
            WatchConfig::default()
        }
    }
}
