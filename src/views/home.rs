use crate::backend::BackendClient;
use crate::error::Result;
use crate::views::Route;
use colored::*;
use tracing::info;

/// Unauthenticated entry view.
pub fn render() -> String {
    let mut out = String::new();
    out.push_str("GitHub OAuth Demo\n");
    out.push_str("Sign in with your GitHub account to see your repositories.\n\n");
    out.push_str("Features:\n");
    out.push_str("  - GitHub OAuth sign-in\n");
    out.push_str("  - Basic profile information\n");
    out.push_str("  - Your repository list\n");
    out.push_str("  - Server-side session management\n");
    out
}

/// Kick off the login flow: open the system browser at the backend's
/// `/auth/github` route and hand over to the auth-success view, which waits
/// for the session cookie to appear.
pub async fn login(client: &BackendClient) -> Result<Route> {
    println!("{}", "GitHub OAuth Demo".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let url = client.login_url()?;
    info!(%url, "opening browser for GitHub login");
    println!("Opening your browser at {}", url.as_str().cyan());
    println!("Complete the GitHub authorization there, then come back.\n");

    if open::that(url.as_str()).is_err() {
        // Headless environments: the user can still paste the URL.
        println!(
            "{} Could not open a browser. Visit the URL above manually.",
            "!".yellow()
        );
    }

    Ok(Route::AuthSuccess)
}
