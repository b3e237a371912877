use clap::Parser;
use colored::*;
use github_dashboard::backend::BackendClient;
use github_dashboard::cli::{Cli, Command};
use github_dashboard::error::{DashboardError, Result};
use github_dashboard::upload::UploadClient;
use github_dashboard::views::{auth_success, dashboard, home, upload, Route};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let backend = BackendClient::new(&cli.backend_url)?;

    match cli.command {
        Command::Login => {
            let mut route = home::login(&backend).await?;
            loop {
                route = match route {
                    Route::AuthSuccess => auth_success::verify(&backend).await?,
                    Route::Dashboard => dashboard::run(&backend).await?,
                    Route::Home => {
                        print!("{}", home::render());
                        break;
                    }
                    Route::Done => break,
                };
            }
        }
        Command::Dashboard => match dashboard::run(&backend).await? {
            Route::Home => {
                println!("{}", "Not signed in. Run `github-dashboard login` first.".yellow());
                print!("{}", home::render());
            }
            _ => {}
        },
        Command::Upload { file } => {
            let uploader = UploadClient::new(&cli.upload_url)?;
            match upload::run(&uploader, file.as_deref()).await {
                Ok(message) => println!("{}", message.green()),
                Err(DashboardError::UploadError(message)) => {
                    eprintln!("{}", message.red());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    std::process::exit(1);
                }
            }
        }
        Command::Logout => {
            dashboard::logout(&backend).await?;
        }
    }

    Ok(())
}
