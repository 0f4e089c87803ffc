use tracing::{info, warn};

use crate::github::UserSource;
use crate::ui::Ui;

/// Keys the search input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Input events from the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The input text changed.
    Input(String),
    /// The search button was clicked.
    Click,
    /// A key was released in the input.
    KeyUp(Key),
    /// The input got focus.
    Focus,
}

/// Text input plus the search button next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBar {
    input: String,
    button_visible: bool,
}

impl Default for SearchBar {
    fn default() -> Self {
        SearchBar {
            input: String::new(),
            button_visible: true,
        }
    }
}

impl SearchBar {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_button_visible(&self) -> bool {
        self.button_visible
    }

    /// Trimmed username, or `None` when there is nothing to search for.
    pub fn username(&self) -> Option<&str> {
        let name = self.input.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Result of one search attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty input or hidden button; nothing happened.
    Skipped,
    Found { login: String },
    Failed { message: String },
}

/// Wires the search bar to the API and the page.
pub struct App<S> {
    source: S,
    ui: Ui,
    search_bar: SearchBar,
}

impl<S: UserSource> App<S> {
    pub fn new(source: S, ui: Ui) -> Self {
        App {
            source,
            ui,
            search_bar: SearchBar::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search_bar
    }

    pub async fn handle_event(&mut self, event: Event) -> SearchOutcome {
        match event {
            Event::Input(text) => {
                self.search_bar.input = text;
                SearchOutcome::Skipped
            }
            Event::Focus => {
                self.search_bar.button_visible = true;
                SearchOutcome::Skipped
            }
            Event::KeyUp(Key::Enter) | Event::Click => {
                if self.search_bar.button_visible {
                    self.search().await
                } else {
                    SearchOutcome::Skipped
                }
            }
            Event::KeyUp(Key::Other) => SearchOutcome::Skipped,
        }
    }

    /// Look up the username in the search bar: profile first, then repos.
    pub async fn search(&mut self) -> SearchOutcome {
        let Some(username) = self.search_bar.username().map(str::to_string) else {
            return SearchOutcome::Skipped;
        };

        self.ui.clear();
        self.ui.show_spinner(format!("Searching for '{}'", username));

        let outcome = match self.fetch(&username).await {
            Ok(login) => {
                self.search_bar.button_visible = false;
                info!("Found user '{}'", login);
                SearchOutcome::Found { login }
            }
            Err(e) => {
                warn!("Search for '{}' failed: {}", username, e);
                let message = e.to_string();
                self.ui.show_error(message.clone());
                SearchOutcome::Failed { message }
            }
        };

        self.ui.hide_spinner();
        outcome
    }

    async fn fetch(&mut self, username: &str) -> crate::error::Result<String> {
        let user = self.source.get_user(username).await?;
        let repos = self.source.get_repos(username).await?;

        let login = user.login.clone();
        self.ui.show_profile(user);
        self.ui.show_repos(repos);
        self.ui.show_grass(&login);
        Ok(login)
    }
}
