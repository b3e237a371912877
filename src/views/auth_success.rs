use crate::backend::BackendClient;
use crate::error::{DashboardError, Result};
use crate::views::Route;
use colored::*;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

pub const POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const MAX_ATTEMPTS: u32 = 30;

/// Post-login verification view.
///
/// The browser original lands here after the provider redirect and checks
/// `/api/user` once. A terminal client cannot observe the redirect, so it
/// polls until the session cookie shows up or the attempts run out.
pub async fn verify(client: &BackendClient) -> Result<Route> {
    verify_with(client, MAX_ATTEMPTS, POLL_INTERVAL).await
}

pub async fn verify_with(
    client: &BackendClient,
    max_attempts: u32,
    interval: Duration,
) -> Result<Route> {
    println!("{}", "Verifying your GitHub account...".bold());

    for attempt in 1..=max_attempts {
        match client.current_user().await {
            Ok(user) => {
                println!(
                    "{} Signed in as {}",
                    "✅".green(),
                    user.login.bold()
                );
                return Ok(Route::Dashboard);
            }
            Err(DashboardError::Unauthorized) => {
                debug!(attempt, max_attempts, "no session yet");
                if attempt < max_attempts {
                    sleep(interval).await;
                }
            }
            Err(e) => return Err(e),
        }
    }

    println!("{}", "Authentication failed, please try again.".red());
    Ok(Route::Home)
}
