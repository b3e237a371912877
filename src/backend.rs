use crate::error::{DashboardError, Result};
use crate::models::{LogoutResponse, Repo, User};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = "GitHub Dashboard Client/0.1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the OAuth demo backend.
///
/// The backend authenticates with a session cookie set during the OAuth
/// callback redirect, so the underlying reqwest client keeps a cookie store
/// and replays it on every `/api/*` call.
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()?;

        Ok(BackendClient { client, base_url })
    }

    /// Entry point of the login flow; the caller navigates a browser here
    /// and the backend takes over the provider redirect dance.
    pub fn login_url(&self) -> Result<Url> {
        Ok(self.base_url.join("/auth/github")?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;
        let response = self.client.get(url).send().await?;
        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(DashboardError::Unauthorized),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(DashboardError::ApiError(format!(
                    "Request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    /// Fetch the logged-in user. A 401 means there is no live session.
    pub async fn current_user(&self) -> Result<User> {
        let response = self.get("/api/user").await?;
        let user: User = response.json().await?;
        Ok(user)
    }

    /// Fetch the user's repositories, in the order the server returns them.
    pub async fn list_repos(&self) -> Result<Vec<Repo>> {
        let response = self.get("/api/repos").await?;
        let repos: Vec<Repo> = response.json().await?;
        Ok(repos)
    }

    /// Clear the server-side session.
    pub async fn logout(&self) -> Result<LogoutResponse> {
        let url = self.base_url.join("/api/logout")?;
        let response = self.client.post(url).send().await?;
        let response = Self::check_status(response).await?;
        let body: LogoutResponse = response.json().await?;
        Ok(body)
    }
}
