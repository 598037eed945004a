//! Server settings
//!
//! Resolution order: CLI flags, then the optional TOML settings file, then
//! the `PORT` environment variable, then built-in defaults. The remote API
//! credential is read separately from the environment by the core library.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use concierge_core::config::DEFAULT_API_URL;

/// Which generation strategy backs the endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// External LLM API with retry/backoff
    Remote,
    /// Static keyword lookup, no outbound calls
    Keyword,
}

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = "concierged", about = "Concierge assistant API server")]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Generation engine
    #[arg(long, value_enum)]
    pub engine: Option<Engine>,
}

/// Optional settings file contents
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub engine: Option<Engine>,
    pub api_url: Option<String>,
}

/// Fully resolved server settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub engine: Engine,
    pub api_url: String,
}

impl Settings {
    /// Resolve settings from the CLI, reading the settings file when given
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings file {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("invalid settings file {}", path.display()))?
            }
            None => SettingsFile::default(),
        };
        let env_port = std::env::var("PORT").ok().and_then(|p| p.parse().ok());
        Ok(Self::resolve(cli, file, env_port))
    }

    fn resolve(cli: &Cli, file: SettingsFile, env_port: Option<u16>) -> Self {
        Self {
            host: cli
                .host
                .clone()
                .or(file.host)
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: cli.port.or(file.port).or(env_port).unwrap_or(5000),
            engine: cli.engine.or(file.engine).unwrap_or(Engine::Remote),
            api_url: file.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}
