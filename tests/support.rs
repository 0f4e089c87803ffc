//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use github_user_finder_lib::models::{Repo, User};
use github_user_finder_lib::{FinderError, Result, UiState, UserSource};
use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub fn user(login: &str) -> User {
    User {
        login: login.to_string(),
        avatar_url: format!("https://avatars.example/{}", login),
        html_url: format!("https://github.com/{}", login),
        name: None,
        company: None,
        blog: None,
        location: Some("Earth".to_string()),
        public_repos: 7,
        public_gists: 1,
        followers: 10,
        following: 2,
        created_at: Utc.with_ymd_and_hms(2015, 6, 1, 12, 0, 0).unwrap(),
    }
}

pub fn repo(name: &str) -> Repo {
    Repo {
        name: name.to_string(),
        html_url: format!("https://github.com/someone/{}", name),
        description: None,
        language: Some("Rust".to_string()),
        stargazers_count: 3,
        watchers_count: 3,
        forks_count: 1,
    }
}

/// In-memory [`UserSource`] that records every call in order, and the UI
/// state at the moment of each call once [`FakeSource::watch`] is set.
#[derive(Default)]
pub struct FakeSource {
    pub users: HashMap<String, User>,
    pub repos: HashMap<String, Vec<Repo>>,
    pub calls: Mutex<Vec<String>>,
    ui_state: Mutex<Option<watch::Receiver<UiState>>>,
    seen_states: Mutex<Vec<UiState>>,
}

impl FakeSource {
    pub fn with_user(mut self, login: &str, repo_count: usize) -> Self {
        self.users.insert(login.to_string(), user(login));
        self.repos.insert(
            login.to_string(),
            (0..repo_count).map(|i| repo(&format!("repo-{}", i))).collect(),
        );
        self
    }

    /// A user whose repository listing fails.
    pub fn with_user_without_repos(mut self, login: &str) -> Self {
        self.users.insert(login.to_string(), user(login));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn watch(&self, state: watch::Receiver<UiState>) {
        *self.ui_state.lock().unwrap() = Some(state);
    }

    /// UI state captured on entry to each request, in call order.
    pub fn seen_states(&self) -> Vec<UiState> {
        self.seen_states.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
        if let Some(state) = self.ui_state.lock().unwrap().as_ref() {
            let current = state.borrow().clone();
            self.seen_states.lock().unwrap().push(current);
        }
    }
}

#[async_trait]
impl UserSource for FakeSource {
    async fn get_user(&self, username: &str) -> Result<User> {
        self.record(format!("user:{}", username));
        self.users
            .get(username)
            .cloned()
            .ok_or_else(|| FinderError::UserNotFound {
                username: username.to_string(),
            })
    }

    async fn get_repos(&self, username: &str) -> Result<Vec<Repo>> {
        self.record(format!("repos:{}", username));
        self.repos
            .get(username)
            .cloned()
            .ok_or(FinderError::Api {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
    }
}

/// Serve one canned `(status, body)` response per connection, in order, on a
/// local port. The handle resolves to the request lines that were received.
pub async fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }
            let head = String::from_utf8_lossy(&head).to_string();
            seen.push(head.lines().next().unwrap_or_default().to_string());

            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
        seen
    });

    (base, handle)
}
