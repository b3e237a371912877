use github_dashboard::backend::BackendClient;
use github_dashboard::error::DashboardError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_body() -> serde_json::Value {
    json!({
        "login": "octocat",
        "name": "The Octocat",
        "email": null,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231"
    })
}

#[tokio::test]
async fn test_backend_client_creation() {
    let client = BackendClient::new("http://localhost:5000");
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_backend_client_rejects_bad_url() {
    let result = BackendClient::new("not a url");
    assert!(matches!(result, Err(DashboardError::InvalidUrl(_))));
}

#[test]
fn test_login_url() {
    let client = BackendClient::new("http://localhost:5000").unwrap();
    let url = client.login_url().unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/auth/github");
}

#[tokio::test]
async fn test_current_user_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .mount(&server)
        .await;

    let client = BackendClient::new(&server.uri()).unwrap();
    let user = client.current_user().await.expect("Failed to fetch user");

    assert_eq!(user.login, "octocat");
    assert_eq!(user.display_name(), "The Octocat");
}

#[tokio::test]
async fn test_current_user_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Not authenticated"})),
        )
        .mount(&server)
        .await;

    let client = BackendClient::new(&server.uri()).unwrap();
    let result = client.current_user().await;

    assert!(matches!(result, Err(DashboardError::Unauthorized)));
}

#[tokio::test]
async fn test_list_repos_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "zeta", "full_name": "octocat/zeta", "description": "Second",
             "html_url": "https://github.com/octocat/zeta", "language": "Rust",
             "stargazers_count": 7},
            {"id": 1, "name": "alpha", "full_name": "octocat/alpha", "description": null,
             "html_url": "https://github.com/octocat/alpha", "language": null,
             "stargazers_count": 42}
        ])))
        .mount(&server)
        .await;

    let client = BackendClient::new(&server.uri()).unwrap();
    let repos = client.list_repos().await.expect("Failed to fetch repos");

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "zeta");
    assert_eq!(repos[1].name, "alpha");
    assert_eq!(repos[1].stargazers_count, 42);
}

#[tokio::test]
async fn test_server_error_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/repos"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": "Failed to fetch repositories"})),
        )
        .mount(&server)
        .await;

    let client = BackendClient::new(&server.uri()).unwrap();
    let result = client.list_repos().await;

    match result.unwrap_err() {
        DashboardError::ApiError(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("Failed to fetch repositories"));
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_logout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Logged out successfully"})),
        )
        .mount(&server)
        .await;

    let client = BackendClient::new(&server.uri()).unwrap();
    let response = client.logout().await.expect("Logout failed");
    assert_eq!(response.message, "Logged out successfully");
}

#[tokio::test]
#[ignore = "Requires a running backend with a live session"]
async fn test_live_dashboard_fetch() {
    let base = std::env::var("BACKEND_URL").expect("BACKEND_URL not set");
    let client = BackendClient::new(&base).expect("Failed to create client");

    let user = client.current_user().await.expect("Failed to fetch user");
    assert!(!user.login.is_empty());

    let repos = client.list_repos().await.expect("Failed to fetch repos");
    for repo in &repos {
        assert!(!repo.name.is_empty());
        assert!(!repo.html_url.is_empty());
    }
}
