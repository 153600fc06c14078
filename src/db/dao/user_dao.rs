use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::User, user};

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;
    type Model = user::Model;
    type ActiveModel = user::ActiveModel;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        let email = email.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(user::Column::Email.eq(email))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    pub async fn create_user(&self, email: &str) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    use super::UserDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::user;
    use crate::test_helpers::user_model;

    #[tokio::test]
    async fn find_by_email_returns_first_match() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(12, "alice@example.com")]])
            .into_connection();
        let dao = UserDao::new(&db);

        let result = dao
            .find_by_email("alice@example.com")
            .await
            .expect("query should succeed");
        assert_eq!(result.map(|u| u.id), Some(12));
    }

    #[tokio::test]
    async fn find_by_email_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let dao = UserDao::new(&db);

        let result = dao
            .find_by_email("missing@example.com")
            .await
            .expect("query should succeed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn create_user_returns_store_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(1, "bob@example.com")]])
            .into_connection();
        let dao = UserDao::new(&db);

        let user = dao
            .create_user("bob@example.com")
            .await
            .expect("insert should succeed");
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "bob@example.com");
    }

    #[tokio::test]
    async fn create_user_surfaces_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "connection reset".to_string(),
            ))])
            .into_connection();
        let dao = UserDao::new(&db);

        let err = dao
            .create_user("bob@example.com")
            .await
            .expect_err("insert should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
        assert!(!err.is_unique_violation());
    }
}
