use std::fs;

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use super::utils::get_config_location;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine the config directory")]
    NoConfigDir,
    #[error("could not access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct General {
    pub site_location: String,
    pub port: u16,
    pub host: String,
}

/// Sections of the index page that are switched on. Anything left out of the config file is on.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSections {
    #[serde(default = "enabled")]
    pub categories: bool,
    #[serde(default = "enabled")]
    pub search: bool,
    #[serde(default = "enabled")]
    pub pager: bool,
}

fn enabled() -> bool {
    true
}

impl Default for IndexSections {
    fn default() -> Self {
        IndexSections {
            categories: true,
            search: true,
            pager: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub general: General,
    #[serde(default)]
    pub index: IndexSections,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            general: General {
                site_location: String::from("~/recipes"),
                port: 6684,
                host: String::from("localhost"),
            },
            index: IndexSections::default(),
        }
    }
}

pub fn parse_config(raw: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(raw)?)
}

pub fn read_config() -> Result<Config, ConfigError> {
    let (_, file) = get_config_location()?;
    parse_config(&fs::read_to_string(file)?)
}

/// Writes the default config unless one already exists. Returns the config file location.
pub fn write_config() -> Result<std::path::PathBuf, ConfigError> {
    let (dir, file) = get_config_location()?;
    if !file.exists() {
        fs::create_dir_all(dir)?;
        fs::write(&file, toml::to_string(&Config::default())?)?;
        log::info!("wrote default config to {:?}", file);
    }
    Ok(file)
}
