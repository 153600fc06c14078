#[allow(unused_imports)]
pub mod prelude {
    pub use super::grocery_list::Entity as GroceryList;
    pub use super::user::Entity as User;
}

pub mod grocery_list;
pub mod user;
