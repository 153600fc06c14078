use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(has_many)]
    pub grocery_lists: HasMany<super::grocery_list::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
