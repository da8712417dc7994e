//! # Character Pool Configuration
//!
//! Selects which character classes feed the generator and resolves them
//! into a concrete alphabet. Three independent classes exist: lowercase
//! letters, uppercase letters and digits; all of them are enabled by
//! default and each can be switched off on its own.
//!
//! ## Example
//!
//! ```yaml
//! lowercase: true
//! uppercase: true
//! digits: false
//! ```
//!
//! Every setting can be overridden with a `RANDID_POOL_*` environment
//! variable.

use figment::{
    Figment,
    providers::{Format, Serialized},
};
use log::debug;
use std::path::PathBuf;

use crate::error::RandidError;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Character pool configuration
///
/// ```rust
/// use randid::PoolConfig;
///
/// let config = PoolConfig::default().without_digits();
///
/// assert!(config.lowercase && config.uppercase);
/// assert!(!config.digits);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PoolConfig {
    /// Include lowercase letters (`a-z`)
    ///
    /// Env: `RANDID_POOL_LOWERCASE`
    #[serde(default = "enabled")]
    pub lowercase: bool,

    /// Include uppercase letters (`A-Z`)
    ///
    /// Env: `RANDID_POOL_UPPERCASE`
    #[serde(default = "enabled")]
    pub uppercase: bool,

    /// Include digits (`0-9`)
    ///
    /// Env: `RANDID_POOL_DIGITS`
    #[serde(default = "enabled")]
    pub digits: bool,
}

fn enabled() -> bool {
    true
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
        }
    }
}

impl PoolConfig {
    /// Exclude lowercase letters from the pool
    pub fn without_lowercase(mut self) -> Self {
        self.lowercase = false;
        self
    }

    /// Exclude uppercase letters from the pool
    pub fn without_uppercase(mut self) -> Self {
        self.uppercase = false;
        self
    }

    /// Exclude digits from the pool
    pub fn without_digits(mut self) -> Self {
        self.digits = false;
        self
    }

    /// Resolve the enabled classes into an alphabet
    ///
    /// Classes are concatenated in a fixed order (lowercase, uppercase,
    /// digits). Excluding every class yields an empty alphabet.
    pub fn alphabet(&self) -> String {
        let mut pool = String::new();
        if self.lowercase {
            pool.push_str(LOWERCASE);
        }
        if self.uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.digits {
            pool.push_str(DIGITS);
        }
        pool
    }

    /// Get the Pool Configuration Figment
    pub(crate) fn figment(base: &Self) -> Figment {
        Figment::from(Serialized::defaults(base))
            .merge(figment::providers::Env::prefixed("RANDID_POOL_"))
    }

    /// Load the pool configuration from `RANDID_POOL_*` environment variables
    pub fn from_env() -> Result<Self, RandidError> {
        Ok(Self::figment(&Self::default()).extract()?)
    }

    /// Load the pool configuration from a YAML file
    ///
    /// Environment variables take precedence over file settings.
    pub fn load(path: &PathBuf) -> Result<Self, RandidError> {
        debug!("Loading pool configuration: {:?}", path);
        if !path.exists() {
            return Err(RandidError::ConfigParseError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let config: Self = Figment::new()
            .merge(figment::providers::Yaml::file(path))
            .merge(figment::providers::Env::prefixed("RANDID_POOL_"))
            .extract()?;
        Ok(config)
    }

    /// Load the pool configuration from a YAML string
    pub fn load_str(data: impl Into<String>) -> Result<Self, RandidError> {
        let data = data.into();
        debug!("Loading pool configuration from str");

        let config: Self = Figment::new()
            .merge(figment::providers::Yaml::string(&data))
            .merge(figment::providers::Env::prefixed("RANDID_POOL_"))
            .extract()?;
        Ok(config)
    }
}
