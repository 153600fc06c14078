use sea_orm::DatabaseConnection;

use super::{DaoBase, GroceryListDao, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn grocery_list(&self) -> GroceryListDao {
        DaoBase::new(&self.db)
    }
}
