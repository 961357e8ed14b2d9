use super::Users;
use crate::config::Config;
use std::sync::Arc;
use tokio_postgres::Client;

/// Get a database connection, bootstrap the users table, and return the
/// client. Table creation failure is logged and tolerated: the table's
/// absence surfaces later as store errors, not as a startup crash.
pub async fn db(config: &Config) -> Result<Arc<Client>, tokio_postgres::Error> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = config.database().connect(tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection error: {e}");
        }
    });
    match client.batch_execute(Users::creates()).await {
        Ok(()) => log::info!("users table created or already exists"),
        Err(e) => log::error!("error creating users table: {e}"),
    }
    Ok(Arc::new(client))
}
