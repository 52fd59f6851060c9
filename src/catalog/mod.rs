pub mod loader;
pub mod manager;

pub use loader::load_catalog;
pub use manager::ProductCatalog;
