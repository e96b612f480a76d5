mod config;
mod controllers;
mod core;
mod db;
mod error;
mod services;

use config::state::AppState;
use error::Error;

pub type AppResult<T> = Result<T, Error>;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let level = std::env::args().nth(1);
    let level = level.as_deref().unwrap_or("debug");
    config::init_logger(level);

    config::load_env(".env");

    let state = AppState::init().await;

    config::http::start_server(state).await
}
