pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod grocery_list_dao;
pub mod user_dao;

pub use base::{ColumnFilter, DaoBase, DaoPager, FilterOp, PaginatedResponse};
pub use base_traits::{EntityId, HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use grocery_list_dao::GroceryListDao;
pub use user_dao::UserDao;
