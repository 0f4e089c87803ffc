//! # GitHub User Finder
//!
//! Look up a GitHub user, fetch their profile and repository list from the
//! public GitHub REST API and render them as a page: profile card, latest
//! repositories and contribution chart.
//!
//! ## Main Components
//!
//! - [`GitHub`]: wrapper over the `users` endpoints, implementing [`UserSource`]
//! - [`Ui`]: page state and loading spinner
//! - [`App`]: search bar events and the profile-then-repos search flow
//! - [`Args`] / [`Config`]: command line and resolved settings
//!
//! ## Example
//!
//! ```no_run
//! use github_user_finder_lib::{App, Event, GitHub, Ui};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let github = GitHub::new("https://api.github.com")?;
//!     let chart_url: reqwest::Url = "https://ghchart.rshah.org".parse()?;
//!     let mut app = App::new(github, Ui::new(5, chart_url, true));
//!
//!     app.handle_event(Event::Input("octocat".to_string())).await;
//!     app.handle_event(Event::Click).await;
//!
//!     println!("{:?}", app.ui().page());
//!     Ok(())
//! }
//! ```

mod app;
mod args;
pub mod config;
mod error;
mod github;
pub mod models;
pub mod render;
mod ui;

pub use crate::app::{App, Event, Key, SearchBar, SearchOutcome};
pub use crate::args::{Args, OutputFormat};
pub use crate::config::Config;
pub use crate::error::{FinderError, Result};
pub use crate::github::{GitHub, UserSource};
pub use crate::ui::{Page, ProfileRegion, Ui, UiState};
