pub mod config;
pub mod export;
pub mod services;
pub mod store;
