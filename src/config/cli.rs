use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::core::fetch::POETRYDB_RANDOM_ENDPOINT;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "poetry-finder")]
#[command(about = "Fetch a random poem from PoetryDB and print its first line")]
pub struct CliConfig {
    #[arg(long, help = "Poem endpoint [default: https://poetrydb.org/random/1]")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds (no timeout by default)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// 合併 CLI 參數與設定檔：CLI > TOML > 預設值
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let endpoint = self
            .endpoint
            .clone()
            .or_else(|| file.endpoint().map(str::to_string))
            .unwrap_or_else(|| POETRYDB_RANDOM_ENDPOINT.to_string());

        let timeout_seconds = self.timeout_seconds.or(file.timeout_seconds());

        Ok(AppConfig {
            endpoint,
            timeout_seconds,
            verbose: self.verbose || file.verbose().unwrap_or(false),
            log_format: self.log_format.or(file.log_format()).unwrap_or_default(),
        })
    }
}
