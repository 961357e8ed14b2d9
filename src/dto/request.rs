use crate::error::ServiceError;
use serde::{Deserialize, Serialize};

/// Create-record request body. Every field is optional at the serde layer
/// so that a missing required field surfaces as a structured validation
/// error rather than a deserializer rejection.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub tech_stacks: Option<String>,
    pub role: Option<String>,
    pub experience: Option<i32>,
}

impl CreateUserRequest {
    /// Check presence of name, email, and role before any store
    /// interaction. Empty strings fail; whitespace is not trimmed.
    pub fn validated(self) -> Result<NewUser, ServiceError> {
        match (
            non_empty(self.name),
            non_empty(self.email),
            non_empty(self.role),
        ) {
            (Some(name), Some(email), Some(role)) => Ok(NewUser {
                name,
                email,
                tech_stacks: self.tech_stacks,
                role,
                experience: self.experience,
            }),
            _ => Err(ServiceError::Validation(
                "Name, email, and role are required".to_string(),
            )),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Validated insert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub tech_stacks: Option<String>,
    pub role: String,
    pub experience: Option<i32>,
}

/// List-records query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Effective row limit. Absent means no cap; a negative value is
    /// rejected before any cursor is opened.
    pub fn limit(&self) -> Result<Option<i64>, ServiceError> {
        match self.limit {
            Some(n) if n < 0 => Err(ServiceError::Validation(
                "limit must be a non-negative integer".to_string(),
            )),
            limit => Ok(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> CreateUserRequest {
        CreateUserRequest {
            name: Some("Ada".to_string()),
            email: Some("ada@x.com".to_string()),
            tech_stacks: Some("rust, postgres".to_string()),
            role: Some("engineer".to_string()),
            experience: Some(5),
        }
    }

    #[test]
    fn complete_request_validates() {
        let user = full().validated().unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@x.com");
        assert_eq!(user.tech_stacks.as_deref(), Some("rust, postgres"));
        assert_eq!(user.role, "engineer");
        assert_eq!(user.experience, Some(5));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let request = CreateUserRequest {
            tech_stacks: None,
            experience: None,
            ..full()
        };
        let user = request.validated().unwrap();
        assert_eq!(user.tech_stacks, None);
        assert_eq!(user.experience, None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        for request in [
            CreateUserRequest { name: None, ..full() },
            CreateUserRequest { email: None, ..full() },
            CreateUserRequest { role: None, ..full() },
        ] {
            match request.validated() {
                Err(ServiceError::Validation(message)) => {
                    assert_eq!(message, "Name, email, and role are required")
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let request = CreateUserRequest {
            email: Some(String::new()),
            ..full()
        };
        assert!(matches!(
            request.validated(),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let request = CreateUserRequest {
            name: Some(" ".to_string()),
            ..full()
        };
        assert_eq!(request.validated().unwrap().name, " ");
    }

    #[test]
    fn absent_limit_means_no_cap() {
        assert_eq!(ListQuery::default().limit().unwrap(), None);
    }

    #[test]
    fn explicit_limit_is_honored() {
        assert_eq!(ListQuery { limit: Some(1) }.limit().unwrap(), Some(1));
        assert_eq!(ListQuery { limit: Some(0) }.limit().unwrap(), Some(0));
    }

    #[test]
    fn negative_limit_is_rejected() {
        assert!(matches!(
            ListQuery { limit: Some(-1) }.limit(),
            Err(ServiceError::Validation(_))
        ));
    }
}
