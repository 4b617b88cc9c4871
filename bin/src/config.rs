use std::process::exit;

use persistance::fs::config::{read_config, write_config, Config};
use persistance::fs::utils::site_location;
use std::path::PathBuf;

pub fn install() {
    match write_config() {
        Ok(file) => println!("Config file at {}", file.display()),
        Err(e) => {
            eprintln!("Could not write config: {}", e);
            exit(1);
        }
    }
}

/// Reads the config and checks the site directory exists, exiting with a message otherwise.
pub fn load() -> (Config, PathBuf) {
    let config = match read_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}. Run `larder --init` to create one.", e);
            exit(1);
        }
    };
    match site_location(&config) {
        Ok(site) => (config, site),
        Err(e) => {
            log::error!("{}", e);
            exit(1);
        }
    }
}
