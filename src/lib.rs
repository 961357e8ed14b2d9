pub mod api;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;

/// Initialize logging from RUST_LOG, defaulting to info.
pub fn logs() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
