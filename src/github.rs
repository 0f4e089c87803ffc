use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{FinderError, Result};
use crate::models::{Repo, User};

const USER_AGENT: &str = concat!("github-user-finder/", env!("CARGO_PKG_VERSION"));

/// Where the search flow gets its data from.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<User>;
    async fn get_repos(&self, username: &str) -> Result<Vec<Repo>>;
}

/// Thin wrapper over the public GitHub REST API `users` endpoints.
pub struct GitHub {
    client: Client,
    api_url: Url,
}

impl GitHub {
    /// Create a new client rooted at `api_url` (e.g. `https://api.github.com`).
    pub fn new(api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url).map_err(|e| {
            FinderError::InvalidConfig(format!("bad API URL '{}': {}", api_url, e))
        })?;
        if api_url.cannot_be_a_base() {
            return Err(FinderError::InvalidConfig(format!(
                "API URL '{}' cannot be used as a base",
                api_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static("2022-11-28"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(GitHub { client, api_url })
    }

    /// URL of `/users/{username}` plus any extra path segments.
    /// The username is percent-encoded as a single segment.
    pub fn users_url(&self, username: &str, extra: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(username);
            segments.extend(extra);
        }
        url
    }

    /// GET `url`. A non-success status comes back as `(status, None)`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        what: &'static str,
    ) -> Result<(StatusCode, Option<T>)> {
        debug!("Requesting URL: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("{} request returned {}", what, status);
            return Ok((status, None));
        }

        let body = response.text().await?;
        let value =
            serde_json::from_str(&body).map_err(|source| FinderError::Decode { what, source })?;
        Ok((status, Some(value)))
    }
}

#[async_trait]
impl UserSource for GitHub {
    async fn get_user(&self, username: &str) -> Result<User> {
        let url = self.users_url(username, &[]);
        match self.fetch(url, "user profile").await? {
            (_, Some(user)) => Ok(user),
            (_, None) => Err(FinderError::UserNotFound {
                username: username.to_string(),
            }),
        }
    }

    async fn get_repos(&self, username: &str) -> Result<Vec<Repo>> {
        let mut url = self.users_url(username, &["repos"]);
        url.query_pairs_mut().append_pair("sort", "updated");
        match self.fetch(url, "repository list").await? {
            (_, Some(repos)) => Ok(repos),
            (status, None) => Err(FinderError::Api { status }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_url_on_public_api() {
        let gh = GitHub::new("https://api.github.com").unwrap();
        assert_eq!(
            gh.users_url("octocat", &[]).as_str(),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            gh.users_url("octocat", &["repos"]).as_str(),
            "https://api.github.com/users/octocat/repos"
        );
    }

    #[test]
    fn users_url_keeps_base_path() {
        let gh = GitHub::new("http://ghe.local/api/v3").unwrap();
        assert_eq!(
            gh.users_url("mona", &["repos"]).as_str(),
            "http://ghe.local/api/v3/users/mona/repos"
        );
    }

    #[test]
    fn username_is_a_single_segment() {
        let gh = GitHub::new("https://api.github.com").unwrap();
        assert_eq!(
            gh.users_url("../orgs/x", &[]).as_str(),
            "https://api.github.com/users/..%2Forgs%2Fx"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(matches!(
            GitHub::new("not a url"),
            Err(FinderError::InvalidConfig(_))
        ));
        assert!(matches!(
            GitHub::new("mailto:someone@example.com"),
            Err(FinderError::InvalidConfig(_))
        ));
    }
}
