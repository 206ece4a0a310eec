//! Data models
//!
//! Rust structs representing database entities.

mod food;
mod food_portion;
mod nutrition;
mod source;

pub use food::{Food, NormalizedFood};
pub use food_portion::{FoodPortion, Portion};
pub use nutrition::Macros;
pub use source::Source;
