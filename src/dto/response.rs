use crate::error::ServiceError;
use serde::{Deserialize, Serialize};

/// One persisted user profile row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub tech_stacks: Option<String>,
    pub role: String,
    pub experience: Option<i32>,
}

impl From<tokio_postgres::Row> for UserRecord {
    fn from(row: tokio_postgres::Row) -> Self {
        Self {
            id: row.get::<_, i32>("id"),
            name: row.get::<_, String>("name"),
            email: row.get::<_, String>("email"),
            tech_stacks: row.get::<_, Option<String>>("tech_stacks"),
            role: row.get::<_, String>("role"),
            experience: row.get::<_, Option<i32>>("experience"),
        }
    }
}

/// Body of a successful create response.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub user: UserRecord,
}

impl From<UserRecord> for CreatedResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

/// Structured body for every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(error: &ServiceError) -> Self {
        Self {
            status: error.status().as_u16(),
            message: error.to_string(),
        }
    }
}
