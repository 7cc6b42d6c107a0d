use config::{Config, ConfigError, Environment, File};
use resolve_path::PathResolveExt;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://www.omgbeaupeep.com/comics/";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prefix every comic url is built on.
    pub base_url: String,
    /// Root that default comic directories are created under.
    pub output_directory: String,
    /// Pause between two chapters.
    pub request_delay_ms: u64,
}

impl Settings {
    /// Defaults, then `config_file` if it exists, then `GRABBER_*` variables.
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("output_directory", "output")?
            .set_default("request_delay_ms", 500)?
            .add_source(File::with_name(config_file).required(false))
            .add_source(Environment::with_prefix("GRABBER"))
            .build()?;
        builder.try_deserialize()
    }

    pub fn output_root(&self) -> PathBuf {
        self.output_directory.resolve().to_path_buf()
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            output_directory: "output".to_owned(),
            request_delay_ms: 500,
        }
    }
}
