use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbBackend, EntityName, EntityTrait, FromQueryResult, IntoActiveModel, Order, PrimaryKeyTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::base_traits::{EntityId, HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

#[derive(Debug, serde::Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterOp {
    Eq(sea_orm::sea_query::Value),
    /// Case-sensitive substring match; the fragment is taken literally.
    Contains(String),
}

impl FilterOp {
    pub fn contains(fragment: &str) -> Self {
        FilterOp::Contains(fragment.to_string())
    }
}

// `LIKE` ignores ASCII case on SQLite, so substring tests go through the
// backend's position function instead.
fn contains_expr<C>(backend: DbBackend, column: C, fragment: &str) -> Expr
where
    C: ColumnTrait,
{
    let position = match backend {
        DbBackend::Postgres => "strpos",
        _ => "instr",
    };
    Expr::from(
        Func::cust(position)
            .arg(Expr::col(column))
            .arg(Expr::val(fragment)),
    )
    .gt(0)
}

#[derive(Debug, Clone)]
pub struct ColumnFilter<C> {
    pub column: C,
    pub op: FilterOp,
}

pub struct DaoPager<D, F>
where
    D: DaoBase,
    F: Fn(Select<D::Entity>) -> Select<D::Entity> + Clone + Send,
{
    dao: D,
    page: u64,
    page_size: u64,
    order: Option<(<D::Entity as EntityTrait>::Column, Order)>,
    apply: F,
    done: bool,
}

impl<D, F> DaoPager<D, F>
where
    D: DaoBase,
    F: Fn(Select<D::Entity>) -> Select<D::Entity> + Clone + Send,
    <D::Entity as EntityTrait>::Column: Clone,
{
    pub async fn next_page(&mut self) -> DaoResult<Option<PaginatedResponse<D::Model>>> {
        if self.done {
            return Ok(None);
        }

        let response = self
            .dao
            .find(
                self.page,
                self.page_size,
                self.order.clone(),
                self.apply.clone(),
            )
            .await?;

        if !response.has_next {
            self.done = true;
        }
        self.page = self.page.saturating_add(1);

        Ok(Some(response))
    }

    pub async fn collect_all(mut self) -> DaoResult<Vec<D::Model>> {
        let mut rows = Vec::new();
        while let Some(mut response) = self.next_page().await? {
            rows.append(&mut response.data);
        }
        Ok(rows)
    }
}

fn entity_name<E: EntityName>() -> &'static str {
    E::default().table_name()
}

fn check_pagination(page: u64, page_size: u64, max_page_size: u64) -> DaoResult<()> {
    if page == 0 || page_size == 0 || page_size > max_page_size {
        return Err(DaoLayerError::InvalidPagination { page, page_size });
    }
    Ok(())
}

#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized {
    type Entity: EntityTrait<
            Model = Self::Model,
            ActiveModel = Self::ActiveModel,
            PrimaryKey: PrimaryKeyTrait<ValueType: From<EntityId>>,
        > + HasCreatedAtColumn
        + Send
        + Sync;
    type Model: FromQueryResult + IntoActiveModel<Self::ActiveModel> + Send + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + HasIdActiveModel
        + TimestampedActiveModel
        + Send;

    const MAX_PAGE_SIZE: u64 = 100;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    async fn create(
        &self,
        data: impl IntoActiveModel<Self::ActiveModel> + Send,
    ) -> DaoResult<Self::Model> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        active.clear_id();
        active.set_created_at(now);
        active.set_updated_at(now);
        tracing::debug!(entity = entity_name::<Self::Entity>(), "inserting row");
        active.insert(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: EntityId) -> DaoResult<Self::Model> {
        let model = Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        model.ok_or(DaoLayerError::NotFound {
            entity: entity_name::<Self::Entity>(),
            id,
        })
    }

    async fn find(
        &self,
        page: u64,
        page_size: u64,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<PaginatedResponse<Self::Model>> {
        check_pagination(page, page_size, Self::MAX_PAGE_SIZE)?;

        let filtered = apply(Self::Entity::find());
        self.fetch_page(filtered, page, page_size, order).await
    }

    async fn find_with_filters(
        &self,
        page: u64,
        page_size: u64,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        filters: &[ColumnFilter<<Self::Entity as EntityTrait>::Column>],
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<PaginatedResponse<Self::Model>>
    where
        <Self::Entity as EntityTrait>::Column: Clone,
    {
        check_pagination(page, page_size, Self::MAX_PAGE_SIZE)?;

        let backend = self.db().get_database_backend();
        let filtered = apply(Self::Entity::find());
        let filtered = filters.iter().fold(filtered, |select, filter| match &filter.op {
            FilterOp::Eq(value) => select.filter(filter.column.clone().eq(value.clone())),
            FilterOp::Contains(fragment) => {
                select.filter(contains_expr(backend, filter.column.clone(), fragment))
            }
        });
        self.fetch_page(filtered, page, page_size, order).await
    }

    async fn fetch_page(
        &self,
        select: Select<Self::Entity>,
        page: u64,
        page_size: u64,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
    ) -> DaoResult<PaginatedResponse<Self::Model>> {
        let ordered = match order {
            Some((column, order)) => select.order_by(column, order),
            None => select.order_by_desc(Self::Entity::created_at_column()),
        };
        let fetch_size = page_size.saturating_add(1);
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let mut data = ordered
            .limit(fetch_size)
            .offset(offset)
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        let has_next = data.len() > page_size as usize;
        if has_next {
            data.truncate(page_size as usize);
        }

        Ok(PaginatedResponse {
            data,
            page,
            page_size,
            has_next,
        })
    }

    fn find_iter<F>(
        &self,
        page_size: Option<u64>,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        apply: F,
    ) -> DaoPager<Self, F>
    where
        F: Fn(Select<Self::Entity>) -> Select<Self::Entity> + Clone + Send,
        <Self::Entity as EntityTrait>::Column: Clone,
    {
        DaoPager {
            dao: self.clone(),
            page: 1,
            page_size: page_size.unwrap_or(Self::MAX_PAGE_SIZE),
            order,
            apply,
            done: false,
        }
    }

    async fn update<F>(&self, id: EntityId, apply: F) -> DaoResult<Self::Model>
    where
        F: for<'a> FnOnce(&'a mut Self::ActiveModel) + Send,
    {
        let model = self.find_by_id(id).await?;

        let mut active = model.into_active_model();
        apply(&mut active);
        active.set_updated_at(Utc::now().fixed_offset());

        active.update(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn delete(&self, id: EntityId) -> DaoResult<EntityId> {
        let result = Self::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: entity_name::<Self::Entity>(),
                id,
            });
        }

        tracing::debug!(entity = entity_name::<Self::Entity>(), id, "deleted row");
        Ok(id)
    }
}
