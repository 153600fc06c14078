use crate::{
    db::dao::{EntityId, GroceryListDao, PaginatedResponse},
    db::entities::{grocery_list, user},
    db::schema,
    error::AppError,
    grocery_list::GroceryList,
    services::crud_service::{CrudErrors, CrudOp, CrudService},
};

#[derive(Clone)]
pub struct GroceryListService {
    grocery_list_dao: GroceryListDao,
}

impl GroceryListService {
    pub fn new(grocery_list_dao: GroceryListDao) -> Self {
        Self { grocery_list_dao }
    }

    pub async fn create_list(
        &self,
        owner_id: EntityId,
        list: &GroceryList,
    ) -> Result<grocery_list::Model, AppError> {
        check_ingredients(list.ingredients())?;
        let created = self
            .grocery_list_dao
            .create_list(owner_id, list)
            .await
            .map_err(|err| self.map_error(CrudOp::Create, err))?;
        tracing::info!(list_id = created.id, owner_id, "grocery list created");
        Ok(created)
    }

    pub async fn require_list(&self, id: EntityId) -> Result<grocery_list::Model, AppError> {
        CrudService::find_by_id(self, id).await
    }

    pub async fn lists_for_owner(
        &self,
        owner_id: EntityId,
    ) -> Result<Vec<grocery_list::Model>, AppError> {
        self.grocery_list_dao
            .list_by_owner(owner_id)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))
    }

    pub async fn count_for_owner(&self, owner_id: EntityId) -> Result<u64, AppError> {
        self.grocery_list_dao
            .count_by_owner(owner_id)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))
    }

    pub async fn search(
        &self,
        owner_id: EntityId,
        fragment: &str,
        page: u64,
        page_size: u64,
    ) -> Result<PaginatedResponse<grocery_list::Model>, AppError> {
        self.grocery_list_dao
            .search_by_title(owner_id, fragment, page, page_size)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))
    }

    pub async fn rename(
        &self,
        id: EntityId,
        title: Option<String>,
    ) -> Result<grocery_list::Model, AppError> {
        self.grocery_list_dao
            .update_title(id, title)
            .await
            .map_err(|err| self.map_error(CrudOp::Update, err))
    }

    pub async fn replace_ingredients(
        &self,
        id: EntityId,
        ingredients: Option<String>,
    ) -> Result<grocery_list::Model, AppError> {
        check_ingredients(ingredients.as_deref())?;
        self.grocery_list_dao
            .update_ingredients(id, ingredients)
            .await
            .map_err(|err| self.map_error(CrudOp::Update, err))
    }

    pub async fn owner_of(&self, id: EntityId) -> Result<user::Model, AppError> {
        self.grocery_list_dao
            .find_owner(id)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))
    }

    pub async fn delete_list(&self, id: EntityId) -> Result<(), AppError> {
        CrudService::delete(self, id).await?;
        tracing::info!(list_id = id, "grocery list deleted");
        Ok(())
    }
}

fn check_ingredients(ingredients: Option<&str>) -> Result<(), AppError> {
    let max = schema::max_ingredients_len();
    match ingredients {
        Some(text) if text.chars().count() > max => {
            tracing::warn!(len = text.chars().count(), max, "ingredients rejected");
            Err(AppError::bad_request(format!(
                "Ingredients must be at most {max} characters"
            )))
        }
        _ => Ok(()),
    }
}

impl CrudService for GroceryListService {
    type Dao = GroceryListDao;

    fn dao(&self) -> &Self::Dao {
        &self.grocery_list_dao
    }

    fn errors(&self) -> CrudErrors {
        CrudErrors {
            not_found: "Grocery list not found",
            invalid_reference: "Owner does not exist",
            ..CrudErrors::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::{GroceryListService, check_ingredients};
    use crate::db::dao::{DaoBase, GroceryListDao};
    use crate::db::schema::INGREDIENTS_MAX_LEN;
    use crate::error::AppError;
    use crate::grocery_list::GroceryList;

    fn service() -> GroceryListService {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        GroceryListService::new(GroceryListDao::new(&db))
    }

    #[test]
    fn ingredients_at_the_bound_are_accepted() {
        let text = "a".repeat(INGREDIENTS_MAX_LEN);
        check_ingredients(Some(&text)).expect("bound is inclusive");
        check_ingredients(None).expect("absent ingredients are fine");
    }

    #[test]
    fn ingredient_bound_counts_characters() {
        let text = "é".repeat(INGREDIENTS_MAX_LEN);
        check_ingredients(Some(&text)).expect("multibyte text within the bound");
    }

    #[tokio::test]
    async fn create_rejects_oversized_ingredients_before_the_store() {
        let list = GroceryList::new("Huge", "x".repeat(INGREDIENTS_MAX_LEN + 1));

        let err = service()
            .create_list(1, &list)
            .await
            .expect_err("ingredients should be rejected");
        assert!(matches!(err, AppError::BadRequest(ref message) if message.contains("65555")));
    }

    #[tokio::test]
    async fn replace_rejects_oversized_ingredients() {
        let err = service()
            .replace_ingredients(1, Some("x".repeat(INGREDIENTS_MAX_LEN + 1)))
            .await
            .expect_err("ingredients should be rejected");
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
