use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// GitHub user finder: look up a GitHub account and show its profile,
/// latest repositories and contribution chart.
#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about,
    long_about = "Look up a GitHub user by name and render their profile, latest repositories and contribution chart. Run without a username to search interactively."
)]
pub struct Args {
    /// GitHub username to look up. Omit to enter usernames interactively.
    pub username: Option<String>,

    /// Base URL of the GitHub REST API.
    /// Falls back to the GITHUB_API_URL environment variable.
    #[clap(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Base URL of the contribution chart service.
    #[clap(long, value_name = "URL", default_value = crate::config::DEFAULT_CHART_URL)]
    pub chart_url: String,

    /// Number of recently updated repositories to show.
    #[clap(short = 'n', long, value_name = "NUM", default_value = "5")]
    pub repo_limit: usize,

    /// How to render the page on stdout.
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the rendered page to this file after every search.
    #[clap(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not show the loading spinner.
    #[clap(long)]
    pub no_spinner: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Styled terminal text
    #[default]
    Text,
    /// Standalone HTML document
    Html,
    /// Page state as JSON
    Json,
}
