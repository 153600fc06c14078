use crate::db::dao::{DaoBase, DaoLayerError, EntityId};
use crate::error::AppError;

type CrudModel<D> = <D as DaoBase>::Model;

#[derive(Clone, Copy)]
pub struct CrudErrors {
    pub create_failed: &'static str,
    pub find_failed: &'static str,
    pub not_found: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub already_exists: &'static str,
    pub invalid_reference: &'static str,
}

impl Default for CrudErrors {
    fn default() -> Self {
        Self {
            create_failed: "Create failed",
            find_failed: "Find failed",
            not_found: "Resource not found",
            update_failed: "Update failed",
            delete_failed: "Delete failed",
            already_exists: "Resource already exists",
            invalid_reference: "Referenced resource does not exist",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum CrudOp {
    Create,
    Find,
    List,
    Update,
    Delete,
}

#[async_trait::async_trait]
pub trait CrudService: Sync {
    type Dao: DaoBase;

    fn dao(&self) -> &Self::Dao;

    fn errors(&self) -> CrudErrors {
        CrudErrors::default()
    }

    fn map_error(&self, op: CrudOp, err: DaoLayerError) -> AppError {
        let errors = self.errors();
        if err.is_unique_violation() {
            return AppError::conflict(errors.already_exists);
        }
        if err.is_foreign_key_violation() {
            return AppError::bad_request(errors.invalid_reference);
        }
        match err {
            DaoLayerError::Db(db_err) => {
                let context = match op {
                    CrudOp::Create => errors.create_failed,
                    CrudOp::Find | CrudOp::List => errors.find_failed,
                    CrudOp::Update => errors.update_failed,
                    CrudOp::Delete => errors.delete_failed,
                };
                tracing::error!(?op, error = %db_err, "database operation failed");
                let message = format!("{context}. Please check the logs for more details");
                AppError::internal_with_source(message, db_err)
            }
            DaoLayerError::NotFound { .. } => AppError::not_found(errors.not_found),
            DaoLayerError::InvalidPagination { .. } => AppError::bad_request(err.to_string()),
        }
    }

    async fn find_by_id(&self, id: EntityId) -> Result<CrudModel<Self::Dao>, AppError> {
        self.dao()
            .find_by_id(id)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))
    }

    async fn delete(&self, id: EntityId) -> Result<(), AppError> {
        self.dao()
            .delete(id)
            .await
            .map(|_| ())
            .map_err(|err| self.map_error(CrudOp::Delete, err))
    }
}
