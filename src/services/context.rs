use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{grocery_list_service::GroceryListService, user_service::UserService},
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn grocery_list(&self) -> GroceryListService {
        GroceryListService::new(self.daos.grocery_list())
    }
}
