use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "reservations-front", version, about = "Hotel inventory client")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL (e.g. http://localhost:8080/api)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Seed the navigation history; repeat for several entries, the last
    /// one is the current location
    #[arg(long = "location", value_name = "LOCATION")]
    pub locations: Vec<String>,

    /// Print every view state as a JSON line instead of starting the
    /// terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Start from a JSON-serialized application state instead of the
    /// initial one
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config and
    /// re-validate.
    pub fn apply_overrides(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        config.validate()
    }
}
