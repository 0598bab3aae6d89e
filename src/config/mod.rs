use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse config: {0}")]
    Yaml(#[from] serde_yml::Error),
}

fn redact_secrets_default() -> bool { return true }
fn max_depth_default() -> usize { return 32 }
fn attention_code_default() -> String { return "129-129:199.199.253.0".to_string() }

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct DecoderConfig {
    /* blank passwords and keys found in parameter trees */
    #[serde(default="redact_secrets_default")]
    pub redact_secrets: bool,
    #[serde(default="max_depth_default")]
    pub max_depth: usize,
    /* sent back for every SetProcParameterRequest */
    #[serde(default="attention_code_default")]
    pub attention_code: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            redact_secrets: redact_secrets_default(),
            max_depth: max_depth_default(),
            attention_code: attention_code_default(),
        }
    }
}

impl DecoderConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        if contents.trim().is_empty() {
            return Ok(DecoderConfig::default());
        }
        let c: DecoderConfig = serde_yml::from_str(&contents)?;
        debug!("Loaded decoder config from {:?}", path.as_ref());
        Ok(c)
    }

    /// Checks config/sml.yaml and sml.yaml, falls back to the defaults if neither exists
    pub fn load_default() -> Result<Self, ConfigError> {
        for p in ["config/sml.yaml", "sml.yaml"] {
            if Path::new(p).exists() {
                info!("Using decoder config {p}");
                return DecoderConfig::load(p);
            }
        }
        warn!("No config on config/sml.yaml or sml.yaml, using defaults");
        Ok(DecoderConfig::default())
    }
}
