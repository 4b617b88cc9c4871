use directories::{ProjectDirs, UserDirs};
use std::{
    env,
    path::{Component, Path, PathBuf, MAIN_SEPARATOR},
};
use thiserror::Error;

use super::config::{Config, ConfigError};

pub const SITE_DIR_VAR: &str = "LARDER_SITE_DIR";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("could not find site directory at {0:?}")]
    SiteNotFound(PathBuf),
    #[error("path escapes the site directory: {0}")]
    OutsideSite(String),
}

pub fn get_config_location() -> Result<(PathBuf, PathBuf), ConfigError> {
    let project_dir = ProjectDirs::from("", "", "larder").ok_or(ConfigError::NoConfigDir)?;
    let config_dir = project_dir.config_dir();
    let mut config_path = PathBuf::from(config_dir);
    config_path.push("config.toml");
    Ok((config_dir.to_owned(), config_path))
}

pub fn parse_location(location: &str) -> PathBuf {
    let mut loc: String;
    if location.contains('~') {
        if let Some(dirs) = UserDirs::new() {
            let home_dir: String = dirs.home_dir().to_string_lossy().into();
            loc = location.replace('~', &home_dir);
        } else {
            loc = location.replace('~', &env::var("HOME").unwrap_or_default());
        }
    } else {
        loc = location.to_owned();
    }
    if !loc.ends_with(MAIN_SEPARATOR) {
        loc.push(MAIN_SEPARATOR)
    }
    PathBuf::from(loc)
}

/// The directory holding `recipes.json`, `faqs.json` and the rest of the site. The
/// `LARDER_SITE_DIR` variable wins over the config file.
pub fn site_location(config: &Config) -> Result<PathBuf, PathError> {
    let location = match env::var(SITE_DIR_VAR) {
        Ok(val) => parse_location(&val),
        _ => parse_location(&config.general.site_location),
    };
    if !location.exists() {
        return Err(PathError::SiteNotFound(location));
    }
    Ok(location)
}

/// Joins a request path onto the site directory, refusing anything that could leave it.
pub fn resolve_site_path(site: &Path, tail: &str) -> Result<PathBuf, PathError> {
    let relative = Path::new(tail);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(PathError::OutsideSite(tail.to_owned()));
    }
    Ok(site.join(relative))
}
