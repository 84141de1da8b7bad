//! Build backend clients from configuration.

use anyhow::{anyhow, Context, Result};
use std::sync::Arc;

use super::{HttpUserDirectory, UserDirectory};
use crate::config::ApiConfig;

/// Create the user directory client described by `config`.
///
/// # Errors
/// Returns error if:
/// - The token environment variable is unset or blank
/// - The HTTP client cannot be constructed
pub fn create_user_directory(config: &ApiConfig) -> Result<Arc<dyn UserDirectory>> {
    let token = config
        .token()
        .ok_or_else(|| anyhow!("Environment variable '{}' is not set", config.token_env))?;

    let directory = HttpUserDirectory::from_config(config, token).context("Failed to create API client")?;
    Ok(Arc::new(directory))
}
