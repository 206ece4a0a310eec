//! Nutrition normalization module
//!
//! Turns raw FoodData Central records into validated foods.

pub mod fields;
pub mod normalizer;
pub mod nutrients;
pub mod portions;
pub mod units;

pub use normalizer::{title_case, Normalizer, Rejection};
pub use nutrients::{MacroAccumulator, MacroField, NutrientTable};
pub use portions::{normalize_portions, FALLBACK_UNIT};
pub use units::{EnergyUnit, KJ_PER_KCAL};
