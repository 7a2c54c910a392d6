//! Runtime configuration.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binary) and fall back to the defaults below.

use crate::error::{InventoryError, Result};
use crate::processing::AssociationMode;
use std::time::Duration;

pub const DEFAULT_MEMBER_SERVICE_URL: &str = "http://member-svc";
pub const DEFAULT_MEMBER_SERVICE_NAME: &str = "member";
pub const DEFAULT_REGION: &str = "ap-northeast-2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_MEMBER_SERVICE_URL: &str = "MEMBER_SERVICE_URL";
pub const ENV_MEMBER_SERVICE_NAME: &str = "MEMBER_SERVICE_NAME";
pub const ENV_REGION: &str = "AWS_INVENTORY_REGION";
pub const ENV_TIMEOUT_SECS: &str = "MEMBER_SERVICE_TIMEOUT_SECS";
pub const ENV_ROUTE_TABLE_ASSOCIATION: &str = "ROUTE_TABLE_ASSOCIATION";

/// Settings shared by every inventory request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Base URL of the membership service, without trailing slash.
    pub member_service_url: String,
    /// First path segment of the membership API.
    pub member_service_name: String,
    /// Region every EC2 client is pinned to.
    pub region: String,
    /// Timeout for the credential lookup.
    pub member_service_timeout: Duration,
    /// How route tables claim subnets.
    pub association_mode: AssociationMode,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            member_service_url: DEFAULT_MEMBER_SERVICE_URL.to_string(),
            member_service_name: DEFAULT_MEMBER_SERVICE_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            member_service_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            association_mode: AssociationMode::default(),
        }
    }
}

impl InventoryConfig {
    /// Build the configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// # Arguments
    /// * `lookup` - Returns the raw value for a variable name, if set
    ///
    /// # Returns
    /// * `Ok(InventoryConfig)` - Defaults overridden by any set values
    /// * `Err(InventoryError::Config)` - If a set value cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = InventoryConfig::default();

        if let Some(url) = non_empty(lookup(ENV_MEMBER_SERVICE_URL)) {
            config.member_service_url = url.trim_end_matches('/').to_string();
        }
        if let Some(name) = non_empty(lookup(ENV_MEMBER_SERVICE_NAME)) {
            config.member_service_name = name.trim_matches('/').to_string();
        }
        if let Some(region) = non_empty(lookup(ENV_REGION)) {
            config.region = region;
        }
        if let Some(secs) = non_empty(lookup(ENV_TIMEOUT_SECS)) {
            let secs: u64 = secs.parse().map_err(|e| {
                InventoryError::Config(format!("{ENV_TIMEOUT_SECS}='{secs}': {e}"))
            })?;
            config.member_service_timeout = Duration::from_secs(secs);
        }
        if let Some(mode) = non_empty(lookup(ENV_ROUTE_TABLE_ASSOCIATION)) {
            config.association_mode = mode.parse()?;
        }

        log::debug!(
            "config member_service_url={} region={} association_mode={:?}",
            config.member_service_url,
            config.region,
            config.association_mode
        );
        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
