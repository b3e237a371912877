use crate::backend::BackendClient;
use crate::error::{DashboardError, Result};
use crate::models::{Repo, User};
use crate::views::Route;
use colored::*;
use tracing::info;

/// Fetch-and-render flow for the dashboard view.
///
/// The two fetches run sequentially, as in the original: user first, then
/// repositories. A 401 on either one means the session is gone and the
/// client routes back to the unauthenticated entry view.
pub async fn run(client: &BackendClient) -> Result<Route> {
    let user = match client.current_user().await {
        Ok(user) => user,
        Err(DashboardError::Unauthorized) => return Ok(Route::Home),
        Err(e) => return Err(e),
    };

    let repos = match client.list_repos().await {
        Ok(repos) => repos,
        Err(DashboardError::Unauthorized) => return Ok(Route::Home),
        Err(e) => return Err(e),
    };

    info!(login = %user.login, repos = repos.len(), "rendering dashboard");
    print!("{}", render(&user, &repos));
    Ok(Route::Done)
}

/// Render the full dashboard: user header plus one card per repository.
pub fn render(user: &User, repos: &[Repo]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "User Dashboard".bold().green()));
    out.push_str(&format!("{}\n\n", "=".repeat(50).dimmed()));

    out.push_str(&format!("{}\n", user.display_name().bold()));
    out.push_str(&format!("@{}\n", user.login));
    if let Some(email) = &user.email {
        out.push_str(&format!("Email: {}\n", email));
    }
    out.push_str(&format!("Avatar: {}\n\n", user.avatar_url.dimmed()));

    out.push_str(&format!("{}\n\n", format!("My Repositories ({})", repos.len()).bold()));
    for card in render_repo_cards(repos) {
        out.push_str(&card);
        out.push('\n');
    }

    out
}

/// One rendered card per repository, in server order.
pub fn render_repo_cards(repos: &[Repo]) -> Vec<String> {
    repos.iter().map(render_repo_card).collect()
}

fn render_repo_card(repo: &Repo) -> String {
    let mut card = String::new();
    card.push_str(&format!("  {}\n", repo.name.bold().cyan()));
    card.push_str(&format!(
        "  {}\n",
        repo.description.as_deref().unwrap_or("No description")
    ));
    if let Some(language) = &repo.language {
        card.push_str(&format!("  Language: {}  ", language));
    } else {
        card.push_str("  ");
    }
    card.push_str(&format!("⭐ {}\n", repo.stargazers_count));
    card.push_str(&format!("  {}\n", repo.html_url.dimmed()));
    card
}

/// Clear the session and go back to the entry view.
pub async fn logout(client: &BackendClient) -> Result<Route> {
    match client.logout().await {
        Ok(response) => {
            println!("{} {}", "✅".green(), response.message);
            Ok(Route::Home)
        }
        // Already logged out; the destination is the same.
        Err(DashboardError::Unauthorized) => Ok(Route::Home),
        Err(e) => Err(e),
    }
}
