mod config;

use std::process::exit;

use persistance::fs::utils::{get_config_location, SITE_DIR_VAR};
use www::{init_logger, server};

#[tokio::main]
async fn main() {
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    for arg in args.iter() {
        match arg.as_ref() {
            "-v" | "--version" => return print_version(),
            "-h" | "--help" => return print_help(),
            "-i" | "--init" => return config::install(),
            _ => {
                if arg.starts_with('-') {
                    eprintln!("unknown option: {}", arg);
                    exit(1);
                }
            }
        }
    }
    init_logger();
    let (config, site) = config::load();
    server(config, site).await;
}

fn print_version() {
    println!("larder v{}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    let location = match get_config_location() {
        Ok((_, file)) => format!("{:#?}", file),
        Err(e) => e.to_string(),
    };
    println!(
        "\nConfig file found at {}\n",
        format!("\x1b[38;5;47m{}\x1b[0m", location)
    );
    print!(
        "Usage: larder [options]
        Options:
        -i, --init                   Write a default config file
        -v, --version                Print version.
        -h, --help                   Show this message.

        Set {} to serve a site directory other than the one in the config file.
        ",
        SITE_DIR_VAR
    );
}
