//! Server configuration read from the environment, with defaults that match
//! local development: `127.0.0.1:5001`, `./uploads` and `./presentations`
//! next to the working directory.

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub uploads_dir: PathBuf,
    pub presentations_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5001);
        let uploads_dir = env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));
        let presentations_dir = env::var("PRESENTATIONS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("presentations"));

        Config {
            host,
            port,
            uploads_dir,
            presentations_dir,
        }
    }
}
