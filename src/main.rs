//! Report service binary.
//!
//! Runs the HTTP server that persists user profile records
//! and streams them back as JSON.

use report_service::*;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    logs();
    api::Server::run().await
}
