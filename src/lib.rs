pub mod cart;
pub mod catalog;
pub mod cli;
pub mod compare;
pub mod error;
pub mod interface;
pub mod models;
pub mod quantity;
pub mod selector;

pub use error::{Result, SelectError};
pub use models::{PricePreference, Product, Recommendation, SelectionCriteria};
pub use selector::select_products;
