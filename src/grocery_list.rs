use serde::{Deserialize, Serialize};

use crate::db::entities::grocery_list;

/// One grocery list as held in memory, detached from the store.
///
/// `id` is 0 until the list has been persisted; the store assigns the real
/// value. Ownership is not part of the record: the repository takes the owner
/// id when a list is created, so a persisted list can never lack one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryList {
    pub id: i64,
    pub title: Option<String>,
    /// Opaque serialized ingredient data.
    pub ingredients: Option<String>,
}

impl GroceryList {
    pub fn new(title: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: Some(title.into()),
            ingredients: Some(ingredients.into()),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn ingredients(&self) -> Option<&str> {
        self.ingredients.as_deref()
    }

    pub fn set_ingredients(&mut self, ingredients: impl Into<String>) {
        self.ingredients = Some(ingredients.into());
    }
}

impl From<grocery_list::Model> for GroceryList {
    fn from(model: grocery_list::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            ingredients: model.ingredients,
        }
    }
}
