pub mod prompts;
pub mod render;

pub use prompts::collect_criteria;
pub use render::{display_cart_report, display_comparison, display_recommendations};
