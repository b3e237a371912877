use crate::error::{DashboardError, Result};
use crate::models::{ApiErrorBody, UploadSuccess};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = "GitHub Dashboard Client/0.1.0";
// PDFs can be large; allow more headroom than the API calls get.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the PDF upload service. The service runs as a separate
/// deployment from the OAuth backend and takes no authentication.
pub struct UploadClient {
    client: Client,
    base_url: Url,
}

impl UploadClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(UPLOAD_TIMEOUT)
            .build()?;

        Ok(UploadClient { client, base_url })
    }

    /// Upload a PDF as multipart field `file` and return the storage result.
    ///
    /// The extension check happens before any network I/O, matching the
    /// `accept=".pdf"` filter the original form applied client-side. The
    /// server validates again and its `{error}` body is surfaced verbatim.
    pub async fn upload_pdf(&self, path: &Path) -> Result<UploadSuccess> {
        if !has_pdf_extension(path) {
            return Err(DashboardError::UploadError(
                "Invalid file, please upload a PDF".to_string(),
            ));
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                DashboardError::UploadError(format!("Invalid file name: {}", path.display()))
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await?;
        debug!(file = %file_name, size = bytes.len(), "uploading PDF");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let url = self.base_url.join("/api/upload")?;
        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status();

        if status.is_success() {
            let result: UploadSuccess = response.json().await?;
            return Ok(result);
        }

        // Error responses carry {"error": "..."}; fall back to the raw body.
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("Upload failed with status {}: {}", status, body));
        Err(DashboardError::UploadError(message))
    }
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
