use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::matcher::MatchPolicy;

pub const DATA_DIR_ENV_VAR: &str = "PANTRY_MATCH_DATA_DIR";
pub const POLICY_ENV_VAR: &str = "PANTRY_MATCH_POLICY";
pub const API_KEY_ENV_OVERRIDE: &str = "GEMINI_API_KEY_ENV";
pub const MODEL_ENV_VAR: &str = "GEMINI_MODEL";
pub const TIMEOUT_ENV_VAR: &str = "GEMINI_TIMEOUT_SECS";

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_API_KEY_ENV_VAR: &str = "GOOGLE_GEMINI_API_KEY";
const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub match_policy: MatchPolicy,
    /// Environment variable the API key is read from at call time.
    pub gemini_api_key_env: String,
    pub gemini_model: String,
    pub request_timeout: Duration,
    /// Optional CSV catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            match_policy: MatchPolicy::default(),
            gemini_api_key_env: DEFAULT_API_KEY_ENV_VAR.to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads overrides from the environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(policy) = lookup(POLICY_ENV_VAR) {
            config.match_policy = policy
                .parse()
                .map_err(|e| anyhow!("{}: {}", POLICY_ENV_VAR, e))?;
        }
        if let Some(name) = lookup(API_KEY_ENV_OVERRIDE).filter(|v| !v.trim().is_empty()) {
            config.gemini_api_key_env = name;
        }
        if let Some(model) = lookup(MODEL_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.gemini_model = model;
        }
        if let Some(secs) = lookup(TIMEOUT_ENV_VAR) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| anyhow!("{} must be a number of seconds: {}", TIMEOUT_ENV_VAR, e))?;
            config.request_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn pantry_path(&self) -> PathBuf {
        self.data_dir.join("pantry.json")
    }

    pub fn recipes_path(&self) -> PathBuf {
        self.data_dir.join("recipes.json")
    }
}
