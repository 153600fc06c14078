use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(id_column = "grocery_list_id")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "grocery_list")]
pub struct Model {
    #[sea_orm(column_name = "grocery_list_title")]
    pub title: Option<String>,
    #[sea_orm(
        column_name = "grocery_list_ingredients",
        column_type = "String(StringLen::N(65555))"
    )]
    pub ingredients: Option<String>,
    #[sea_orm(column_name = "grocery_list_user_id", indexed)]
    pub owner_id: i64,
    #[sea_orm(belongs_to, from = "owner_id", to = "id", on_delete = "Cascade")]
    pub owner: HasOne<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
