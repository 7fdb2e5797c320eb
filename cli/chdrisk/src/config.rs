//! `chdrisk.toml` settings and artifact path resolution.
//!
//! Artifact paths resolve in this order: command-line flag, environment
//! variable, config file, built-in default.

use chd_report::Branding;
use chd_risk::ArtifactPaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "chdrisk.toml";
pub const MODEL_PATH_ENV: &str = "CHDRISK_MODEL_PATH";
pub const SCALER_PATH_ENV: &str = "CHDRISK_SCALER_PATH";
pub const DEFAULT_OUTPUT: &str = "dashboard.html";

/// Written by `chdrisk init`
pub const DEFAULT_CONFIG: &str = r#"# chdrisk configuration

[model]
model_path = "assets/heart_disease_model.json"
scaler_path = "assets/heart_disease_scaler.json"

[report]
title = "Cardiovascular Risk Assessment"
# subtitle = "Framingham Heart Study Predictive Model"
# author = "Your Name"
output = "dashboard.html"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSection {
    pub model_path: Option<PathBuf>,
    pub scaler_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub model: ModelSection,
    pub report: ReportSection,
}

impl Config {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read an explicitly named config file, or `./chdrisk.toml` when it exists.
    ///
    /// A missing explicit file is an error; a missing implicit one yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(CONFIG_FILE);
                if !p.exists() {
                    log::debug!("no {CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Self::from_toml_str(&text, &path)
    }

    /// Artifact locations after applying flag and environment overrides.
    ///
    /// `env` looks up one variable; the binary passes `std::env::var`.
    pub fn artifact_paths<F>(
        &self,
        model_flag: Option<&Path>,
        scaler_flag: Option<&Path>,
        env: F,
    ) -> ArtifactPaths
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ArtifactPaths::default();
        let pick = |flag: Option<&Path>, var: &str, file: &Option<PathBuf>, default: PathBuf| {
            flag.map(Path::to_path_buf)
                .or_else(|| env(var).filter(|v| !v.is_empty()).map(PathBuf::from))
                .or_else(|| file.clone())
                .unwrap_or(default)
        };
        ArtifactPaths {
            model: pick(
                model_flag,
                MODEL_PATH_ENV,
                &self.model.model_path,
                defaults.model,
            ),
            scaler: pick(
                scaler_flag,
                SCALER_PATH_ENV,
                &self.model.scaler_path,
                defaults.scaler,
            ),
        }
    }

    pub fn branding(&self) -> Branding {
        Branding {
            title: self.report.title.clone(),
            subtitle: self.report.subtitle.clone(),
            author: self.report.author.clone(),
        }
    }

    /// Dashboard destination: the flag, then the config file, then `dashboard.html`.
    pub fn output_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.report.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}
