use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, Set,
};

use super::{
    ColumnFilter, DaoBase, DaoLayerError, DaoResult, EntityId, FilterOp, PaginatedResponse,
    UserDao,
};
use crate::db::entities::prelude::GroceryList as GroceryListEntity;
use crate::db::entities::{grocery_list, user};
use crate::grocery_list::GroceryList;

#[derive(Clone)]
pub struct GroceryListDao {
    db: DatabaseConnection,
}

impl DaoBase for GroceryListDao {
    type Entity = GroceryListEntity;
    type Model = grocery_list::Model;
    type ActiveModel = grocery_list::ActiveModel;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl GroceryListDao {
    /// Persists `list` for `owner_id`. Any id already on `list` is ignored.
    pub async fn create_list(
        &self,
        owner_id: EntityId,
        list: &GroceryList,
    ) -> DaoResult<grocery_list::Model> {
        let model = grocery_list::ActiveModel {
            title: Set(list.title.clone()),
            ingredients: Set(list.ingredients.clone()),
            owner_id: Set(owner_id),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_list(&self, id: EntityId) -> DaoResult<grocery_list::Model> {
        self.find_by_id(id).await
    }

    pub async fn list_by_owner(&self, owner_id: EntityId) -> DaoResult<Vec<grocery_list::Model>> {
        self.find_iter(
            None,
            Some((grocery_list::Column::Id, Order::Asc)),
            move |query| query.filter(grocery_list::Column::OwnerId.eq(owner_id)),
        )
        .collect_all()
        .await
    }

    pub async fn count_by_owner(&self, owner_id: EntityId) -> DaoResult<u64> {
        GroceryListEntity::find()
            .filter(grocery_list::Column::OwnerId.eq(owner_id))
            .count(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    pub async fn search_by_title(
        &self,
        owner_id: EntityId,
        fragment: &str,
        page: u64,
        page_size: u64,
    ) -> DaoResult<PaginatedResponse<grocery_list::Model>> {
        let filters = [
            ColumnFilter {
                column: grocery_list::Column::OwnerId,
                op: FilterOp::Eq(owner_id.into()),
            },
            ColumnFilter {
                column: grocery_list::Column::Title,
                op: FilterOp::contains(fragment),
            },
        ];
        self.find_with_filters(
            page,
            page_size,
            Some((grocery_list::Column::Id, Order::Asc)),
            &filters,
            |query| query,
        )
        .await
    }

    pub async fn update_title(
        &self,
        id: EntityId,
        title: Option<String>,
    ) -> DaoResult<grocery_list::Model> {
        self.update(id, move |active| {
            active.title = Set(title);
        })
        .await
    }

    pub async fn update_ingredients(
        &self,
        id: EntityId,
        ingredients: Option<String>,
    ) -> DaoResult<grocery_list::Model> {
        self.update(id, move |active| {
            active.ingredients = Set(ingredients);
        })
        .await
    }

    pub async fn find_owner(&self, id: EntityId) -> DaoResult<user::Model> {
        let list = self.find_by_id(id).await?;
        UserDao::new(&self.db).find_by_id(list.owner_id).await
    }

    pub async fn delete_list(&self, id: EntityId) -> DaoResult<EntityId> {
        self.delete(id).await
    }
}
