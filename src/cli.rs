use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-dashboard")]
#[command(about = "Terminal front-end for the GitHub OAuth demo backend and the PDF upload service")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// OAuth demo backend base URL
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:5000")]
    pub backend_url: String,

    /// PDF upload service base URL
    #[arg(long, env = "UPLOAD_URL", default_value = "http://localhost:5001")]
    pub upload_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in with GitHub and open the dashboard
    Login,

    /// Show the signed-in user and their repositories
    Dashboard,

    /// Upload a PDF to the storage service
    Upload {
        /// Path to the PDF file
        file: Option<PathBuf>,
    },

    /// Clear the server-side session
    Logout,
}
