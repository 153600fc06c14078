pub mod context;
pub mod crud_service;
pub mod grocery_list_service;
pub mod user_service;

pub use context::ServiceContext;
pub use grocery_list_service::GroceryListService;
pub use user_service::UserService;
