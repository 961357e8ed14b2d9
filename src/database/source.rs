use super::USERS;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::RowStream;
use tokio_postgres::types::ToSql;

/// Source defines the read interface between domain types and PostgreSQL.
/// Selects open a server-side cursor and yield rows one at a time; the
/// full result set is never materialized. Dropping the stream closes the
/// cursor, which is the cancel path when a client disconnects mid-response.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    async fn select(&self, limit: Option<i64>) -> Result<RowStream, tokio_postgres::Error>;
}

#[async_trait::async_trait]
impl Source for Client {
    async fn select(&self, limit: Option<i64>) -> Result<RowStream, tokio_postgres::Error> {
        #[rustfmt::skip]
        const ALL: &str = const_format::concatcp!(
            "SELECT   * ",
            "FROM     ", USERS, " ",
            "ORDER BY id"
        );
        #[rustfmt::skip]
        const CAPPED: &str = const_format::concatcp!(
            "SELECT   * ",
            "FROM     ", USERS, " ",
            "ORDER BY id ",
            "LIMIT    $1"
        );
        match limit {
            Some(ref n) => self.query_raw(CAPPED, [n as &(dyn ToSql + Sync)]).await,
            None => {
                self.query_raw(ALL, std::iter::empty::<&(dyn ToSql + Sync)>())
                    .await
            }
        }
    }
}

#[async_trait::async_trait]
impl Source for Arc<Client> {
    async fn select(&self, limit: Option<i64>) -> Result<RowStream, tokio_postgres::Error> {
        self.as_ref().select(limit).await
    }
}
