use crate::{
    db::dao::{DaoBase, DaoLayerError, EntityId, UserDao},
    db::entities::user,
    error::AppError,
    services::crud_service::{CrudErrors, CrudOp, CrudService},
};

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    pub async fn register(&self, email: &str) -> Result<user::Model, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::bad_request("Email must not be empty"));
        }
        if self.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict(self.errors().already_exists));
        }

        let user = self
            .user_dao
            .create_user(email)
            .await
            .map_err(|err| self.map_error(CrudOp::Create, err))?;
        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    pub async fn find_by_id(&self, id: EntityId) -> Result<Option<user::Model>, AppError> {
        match self.user_dao.find_by_id(id).await {
            Ok(model) => Ok(Some(model)),
            Err(DaoLayerError::NotFound { .. }) => Ok(None),
            Err(err) => Err(self.map_error(CrudOp::Find, err)),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AppError> {
        self.user_dao
            .find_by_email(email.trim())
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))
    }
}

impl CrudService for UserService {
    type Dao = UserDao;

    fn dao(&self) -> &Self::Dao {
        &self.user_dao
    }

    fn errors(&self) -> CrudErrors {
        CrudErrors {
            not_found: "User not found",
            already_exists: "Email already registered",
            ..CrudErrors::default()
        }
    }
}
