use crate::database::Sink;
use crate::database::Source;
use crate::dto::CreateUserRequest;
use crate::dto::UserRecord;
use crate::error::ServiceError;
use futures::StreamExt;
use futures::stream::BoxStream;
use std::sync::Arc;
use tokio_postgres::Client;

/// API owns the store handle. Handlers receive it by injection at server
/// construction; it is never ambient global state.
pub struct API(Arc<Client>);

impl From<Arc<Client>> for API {
    fn from(client: Arc<Client>) -> Self {
        Self(client)
    }
}

impl API {
    /// Validate and persist one user record, returning the inserted row
    /// with its generated id. Validation failure never reaches the store.
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserRecord, ServiceError> {
        let user = request.validated()?;
        Ok(self.0.insert(&user).await?)
    }

    /// Open a cursor over user records and return them as a lazy sequence.
    /// Each call opens a fresh cursor; a cursor failure mid-iteration
    /// surfaces as a terminal Err item on the sequence rather than being
    /// swallowed.
    pub async fn stream(
        &self,
        limit: Option<i64>,
    ) -> Result<BoxStream<'static, Result<UserRecord, ServiceError>>, ServiceError> {
        let rows = self.0.select(limit).await?;
        Ok(rows
            .map(|row| {
                row.map(UserRecord::from)
                    .map_err(|e| ServiceError::Stream(e.to_string()))
            })
            .boxed())
    }
}
