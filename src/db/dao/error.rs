use sea_orm::{DbErr, SqlErr};

use super::base_traits::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: EntityId },
    #[error("Invalid pagination: page={page} page_size={page_size}")]
    InvalidPagination { page: u64, page_size: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }

    fn sql_err(&self) -> Option<SqlErr> {
        match self {
            DaoLayerError::Db(err) => err.sql_err(),
            _ => None,
        }
    }
}
