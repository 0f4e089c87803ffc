use std::env;
use std::path::PathBuf;

use reqwest::Url;
use tracing::debug;

use crate::args::{Args, OutputFormat};
use crate::error::{FinderError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_CHART_URL: &str = "https://ghchart.rshah.org";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Settings resolved from the command line and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Trimmed username for a one-shot lookup; `None` means interactive.
    pub username: Option<String>,
    pub api_url: String,
    pub chart_url: Url,
    pub repo_limit: usize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub spinner: bool,
}

impl Config {
    /// Resolve settings. `--api-url` wins over `GITHUB_API_URL`, which wins
    /// over the public API.
    pub fn from_args(args: &Args) -> Result<Self> {
        let env_api_url = env::var(API_URL_ENV).ok();
        Self::resolve(args, env_api_url)
    }

    fn resolve(args: &Args, env_api_url: Option<String>) -> Result<Self> {
        let api_url = match &args.api_url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => match env_api_url {
                Some(url) if !url.trim().is_empty() => {
                    debug!("Using API URL from {}", API_URL_ENV);
                    url
                }
                _ => DEFAULT_API_URL.to_string(),
            },
        };

        let username = match &args.username {
            Some(name) if name.trim().is_empty() => {
                return Err(FinderError::InvalidConfig(
                    "username must not be blank".into(),
                ));
            }
            Some(name) => Some(name.trim().to_string()),
            None => None,
        };

        if args.chart_url.trim().is_empty() {
            return Err(FinderError::InvalidConfig(
                "chart URL must not be empty".into(),
            ));
        }
        let chart_url = Url::parse(&normalize(&args.chart_url)).map_err(|e| {
            FinderError::InvalidConfig(format!("bad chart URL '{}': {}", args.chart_url, e))
        })?;
        if args.repo_limit == 0 {
            return Err(FinderError::InvalidConfig(
                "repo limit must be at least 1".into(),
            ));
        }

        Ok(Config {
            username,
            api_url: normalize(&api_url),
            chart_url,
            repo_limit: args.repo_limit,
            format: args.format,
            output: args.output.clone(),
            spinner: !args.no_spinner,
        })
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
