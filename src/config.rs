//! TOML configuration: named profiles supplying call defaults.

use crate::errors::CliError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root of the production API. Overridable per profile or with --api-url.
pub const DEFAULT_API_URL: &str = "https://api.elasticlicensing.com/v1";

/// Credentials used to sign API calls. Generated with `users ... access-keys create`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AccessKey {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "secretAccessKey")]
    pub secret_access_key: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "expiryDate")]
    pub expiry_date: Option<DateTime<Utc>>,
}

/// A named set of call defaults read from the config file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Profile {
    #[serde(default, rename = "accessKey")]
    pub access_key: AccessKey,
    /// How many times to try an API call before giving up. Always >= 1
    /// after defaulting.
    #[serde(default, rename = "maxAPITries")]
    pub max_api_tries: u32,
    /// One of wholeResponse|bodyOnly|statusCodeOnly.
    #[serde(default)]
    pub output: String,
    /// How long to wait for an access-key creation reply before giving up.
    #[serde(default, rename = "apiTimeoutSecs")]
    pub api_timeout_secs: u64,
    #[serde(default, rename = "apiUrl")]
    pub api_url: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        let mut p = Profile {
            access_key: AccessKey::default(),
            max_api_tries: 0,
            output: String::new(),
            api_timeout_secs: 0,
            api_url: None,
        };
        p.set_defaults();
        p
    }
}

impl Profile {
    /// Replaces invalid zero-values with their defaults.
    pub fn set_defaults(&mut self) {
        if self.max_api_tries == 0 {
            self.max_api_tries = 2;
        }
        if self.output.is_empty() {
            self.output = "wholeResponse".to_string();
        }
        if self.api_timeout_secs == 0 {
            self.api_timeout_secs = 30;
        }
    }
}

/// Parsed configuration providing per-profile defaults for commands.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Config {
    /// Looks up a profile by name. A missing explicitly-named profile is an
    /// error; a missing implicit "default" profile silently yields default
    /// settings, since most users run without a config file.
    pub fn profile(&self, name: &str) -> Result<Profile, CliError> {
        if let Some(p) = self.profiles.get(name) {
            return Ok(p.clone());
        }
        if name == "default" {
            Ok(Profile::default())
        } else {
            Err(CliError::ProfileNotFound(name.to_string()))
        }
    }
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".els").join("els-cli.toml"))
}

/// Parses config TOML, applying per-profile defaults.
pub fn parse(raw: &str) -> anyhow::Result<Config> {
    let mut c: Config = toml::from_str(raw)?;
    for p in c.profiles.values_mut() {
        p.set_defaults();
    }
    Ok(c)
}

/// Reads the user's config file. A missing file is not an error (empty
/// config); malformed TOML is fatal.
pub fn read_config() -> anyhow::Result<Config> {
    let path = match config_path() {
        Ok(p) => p,
        Err(_) => return Ok(Config::default()),
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    parse(&raw).map_err(|e| anyhow::anyhow!("Invalid TOML in config file {}: {}", path.display(), e))
}
