use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<DbErr>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal_with_source(message: impl Into<String>, source: DbErr) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) | Self::Conflict(message) => {
                message.as_str()
            }
            Self::Internal { message, .. } => message.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use sea_orm::DbErr;

    use super::AppError;

    #[test]
    fn internal_keeps_database_source() {
        let err = AppError::internal_with_source(
            "Create failed",
            DbErr::Custom("disk full".to_string()),
        );
        assert_eq!(err.to_string(), "Create failed");
        let source = err.source().expect("source should be kept");
        assert!(source.to_string().contains("disk full"));
    }

    #[test]
    fn message_matches_display() {
        let err = AppError::conflict("Email already registered");
        assert_eq!(err.message(), "Email already registered");
        assert_eq!(err.to_string(), err.message());
        assert!(err.source().is_none());
    }
}
