pub mod parser;
pub mod units;

pub use parser::{parse_pack_size, parse_quantity};
pub use units::{Dimension, Quantity, Unit};
