use clap::Parser;
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "SNIP_CONFIG";
pub const REDIS_URL_ENV: &str = "SNIP_REDIS_URL";

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

#[derive(Debug, Parser)]
#[command(name = "snip-gateway")]
pub struct CLI {
    /// Path to the JSON configuration file.
    #[arg(long, env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Redis connection URL.
    #[arg(long, env = REDIS_URL_ENV, default_value = DEFAULT_REDIS_URL)]
    pub redis_url: String,
}
