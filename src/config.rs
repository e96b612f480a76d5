pub mod http;
pub mod state;

use std::env::{self, VarError};
use tracing_subscriber::EnvFilter;

/// Gets an environment variable for the given key.
pub fn get(key: &str) -> Result<String, VarError> {
    env::var(key)
}

/// Tries to load a variable from the shell env and if not found returns the
/// provided default value.
pub fn get_or_default(key: &str, default: &str) -> String {
    get(key).unwrap_or_else(|_| String::from(default))
}

/// Reads an env file and sets all of its declared variables in the shell
/// environment. Missing files are ignored so a fully configured shell works
/// without one.
pub fn load_env(path: &str) {
    dotenv::from_path(path).ok();
}

pub fn init_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
