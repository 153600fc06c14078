pub mod config;
pub mod db;
pub mod error;
pub mod grocery_list;
pub mod logging;
pub mod services;
pub mod test_helpers;

pub use grocery_list::GroceryList;
