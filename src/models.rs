use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `/api/user`.
///
/// The backend stores a trimmed-down copy of the GitHub profile in the
/// session and echoes it back; unknown fields are ignored on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: String,
}

impl User {
    /// Display name shown in the dashboard header, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// Repository entry from `/api/repos`.
///
/// The backend already simplifies the GitHub payload down to these fields.
/// Order is whatever the server returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
}

/// Successful response from `POST /api/upload` (HTTP 201).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSuccess {
    pub message: String,
    pub file_name: String,
    pub minio_path: String,
}

/// Error body the backend uses across endpoints: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Response from `POST /api/logout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}
