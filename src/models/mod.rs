mod criteria;
mod product;
mod recommendation;

pub use criteria::{PricePreference, SelectionCriteria};
pub use product::Product;
pub use recommendation::Recommendation;
