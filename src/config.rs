//! Application configuration.
//!
//! Handles loading and validating `thumbcache.toml`. Everything the resize
//! path used to pull from ambient host state — the server document root, the
//! multi-tenant path table, the JPEG quality override — is explicit
//! configuration here.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! document_root = "."   # Filesystem root the URL path is resolved against
//! jpeg_quality = 90     # JPEG encode quality (1-100)
//!
//! # Multi-tenant installs only: remap tenant-scoped upload paths to the
//! # shared storage tree. A resolved path containing "{url_prefix}files/"
//! # becomes "{storage_root}/{id}/files/".
//! # [tenant]
//! # id = 7
//! # url_prefix = "/sites/alpha/"
//! # storage_root = "/var/storage/blogs"
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `thumbcache.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Filesystem root that URL paths are resolved against.
    pub document_root: PathBuf,
    /// JPEG encode quality (1-100) for derivatives converted to JPEG.
    pub jpeg_quality: u32,
    /// Optional multi-tenant path remapping.
    pub tenant: Option<TenantConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            document_root: PathBuf::from("."),
            jpeg_quality: 90,
            tenant: None,
        }
    }
}

/// Multi-tenant remap rule: a tenant-scoped URL path prefix maps to a shared
/// storage prefix keyed by tenant id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantConfig {
    /// Tenant id, becomes a path segment under `storage_root`.
    pub id: u64,
    /// URL path prefix owned by the tenant, e.g. `/sites/alpha/`.
    pub url_prefix: String,
    /// Shared storage tree that actually holds tenant uploads, as a path
    /// under the document root.
    pub storage_root: String,
}

impl AppConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(ConfigError::Validation(format!(
                "jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        if let Some(tenant) = &self.tenant
            && tenant.url_prefix.is_empty()
        {
            return Err(ConfigError::Validation(
                "tenant.url_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
