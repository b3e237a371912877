use crate::error::{DashboardError, Result};
use crate::models::UploadSuccess;
use crate::upload::UploadClient;
use std::path::Path;
use tracing::info;

pub const NO_FILE_SELECTED: &str = "Please select a PDF file first.";

/// Upload-form flow: validate the selection, post the file, and produce the
/// user-visible message. With no file selected this fails before any network
/// call is made, exactly as the form did.
pub async fn run(client: &UploadClient, selected_file: Option<&Path>) -> Result<String> {
    let path = selected_file
        .ok_or_else(|| DashboardError::UploadError(NO_FILE_SELECTED.to_string()))?;

    let result = client.upload_pdf(path).await?;
    info!(file = %result.file_name, path = %result.minio_path, "upload complete");
    Ok(success_message(&result))
}

pub fn success_message(result: &UploadSuccess) -> String {
    format!(
        "Success! File '{}' uploaded to MinIO at {}.",
        result.file_name, result.minio_path
    )
}
