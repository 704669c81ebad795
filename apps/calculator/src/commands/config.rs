//! # Config Commands
//!
//! Commands for retrieving and loading calculator configuration.

use std::path::Path;

use quote_core::PriceTable;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ConfigState;

/// Loads a price table file chosen at runtime.
///
/// ## Errors
/// `ApiError` with `CONFIG_ERROR` when the file is missing, is not valid
/// TOML, or holds a bad price. Unlike `ConfigState::from_env`, nothing falls
/// back to defaults here; the caller keeps its current configuration.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigState, ApiError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "load_config command");

    let config = ConfigState::from_file(path)?;
    info!(
        path = %path.display(),
        packages = config.price_table.packages.len(),
        "Price table loaded"
    );
    Ok(config)
}

/// Gets the current calculator configuration.
///
/// ## When Used
/// - Page load (currency symbol for static labels)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Gets the active price table.
///
/// ## When Used
/// - Filling the package dropdown with tier prices
pub fn get_price_table(config: &ConfigState) -> PriceTable {
    debug!("get_price_table command");
    config.price_table.clone()
}
