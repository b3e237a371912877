pub mod backend;
pub mod cli;
pub mod error;
pub mod models;
pub mod upload;
pub mod views;
