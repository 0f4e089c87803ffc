use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;
use serde::Serialize;
use tokio::sync::watch;

use crate::models::{Repo, User};

/// What the profile region of the page currently shows.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProfileRegion {
    #[default]
    Empty,
    Card(Box<User>),
    Error(String),
}

/// The rendered page: profile, latest repos and contribution chart.
///
/// `repos` is `None` while the region is empty; `Some` means the
/// "Latest Repos" heading is shown, even with no entries under it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Page {
    pub profile: ProfileRegion,
    pub repos: Option<Vec<Repo>>,
    pub chart: Option<String>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.profile == ProfileRegion::Empty && self.repos.is_none() && self.chart.is_none()
    }

    pub fn user(&self) -> Option<&User> {
        match &self.profile {
            ProfileRegion::Card(user) => Some(user.as_ref()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.profile {
            ProfileRegion::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// What observers see after every change to the [`Ui`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub loading: bool,
    pub page: Page,
}

/// Owns the page state and the loading spinner.
pub struct Ui {
    page: Page,
    spinner: Option<ProgressBar>,
    spinner_enabled: bool,
    repo_limit: usize,
    chart_url: Url,
    state: watch::Sender<UiState>,
}

impl Ui {
    pub fn new(repo_limit: usize, chart_url: Url, spinner_enabled: bool) -> Self {
        Ui {
            page: Page::default(),
            spinner: None,
            spinner_enabled,
            repo_limit,
            chart_url,
            state: watch::Sender::new(UiState::default()),
        }
    }

    /// Follow the page and loading indicator as they change.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    fn publish(&self) {
        self.state.send_replace(UiState {
            loading: self.is_loading(),
            page: self.page.clone(),
        });
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Whether the loading indicator is currently up.
    pub fn is_loading(&self) -> bool {
        self.spinner.is_some()
    }

    pub fn show_spinner(&mut self, message: impl Into<String>) {
        self.hide_spinner();

        let pb = if self.spinner_enabled {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(pb);
        self.publish();
    }

    pub fn hide_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
            self.publish();
        }
    }

    pub fn show_profile(&mut self, user: User) {
        self.page.profile = ProfileRegion::Card(Box::new(user));
        self.publish();
    }

    /// Show the first `repo_limit` repos in the order given.
    pub fn show_repos(&mut self, mut repos: Vec<Repo>) {
        repos.truncate(self.repo_limit);
        self.page.repos = Some(repos);
        self.publish();
    }

    /// Point the chart region at `{chart_url}/{login}`, the login encoded
    /// as a single path segment.
    pub fn show_grass(&mut self, login: &str) {
        let mut url = self.chart_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(login);
        }
        self.page.chart = Some(url.to_string());
        self.publish();
    }

    /// Replace the profile with `msg` and empty everything else.
    pub fn show_error(&mut self, msg: impl Into<String>) {
        self.page.profile = ProfileRegion::Error(msg.into());
        self.page.repos = None;
        self.page.chart = None;
        self.publish();
    }

    pub fn clear(&mut self) {
        self.page = Page::default();
        self.publish();
    }
}

impl Drop for Ui {
    fn drop(&mut self) {
        self.hide_spinner();
    }
}
