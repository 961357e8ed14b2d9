use super::USERS;
use crate::dto::NewUser;
use crate::dto::UserRecord;
use std::sync::Arc;
use tokio_postgres::Client;

/// Sink defines the write interface between domain types and PostgreSQL.
/// All INSERT queries are consolidated here, decoupling SQL from the
/// endpoint layer.
#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    async fn insert(&self, user: &NewUser) -> Result<UserRecord, tokio_postgres::Error>;
}

#[async_trait::async_trait]
impl Sink for Client {
    async fn insert(&self, user: &NewUser) -> Result<UserRecord, tokio_postgres::Error> {
        #[rustfmt::skip]
        const SQL: &str = const_format::concatcp!(
            "INSERT INTO ", USERS, " (name, email, tech_stacks, role, experience) ",
            "VALUES                  ($1,   $2,    $3,          $4,   $5) ",
            "RETURNING   *"
        );
        self.query_one(
            SQL,
            &[
                &user.name,
                &user.email,
                &user.tech_stacks,
                &user.role,
                &user.experience,
            ],
        )
        .await
        .map(UserRecord::from)
    }
}

#[async_trait::async_trait]
impl Sink for Arc<Client> {
    async fn insert(&self, user: &NewUser) -> Result<UserRecord, tokio_postgres::Error> {
        self.as_ref().insert(user).await
    }
}
