//! Macro-nutrient values
//!
//! The four nutrients every imported food must carry.

use serde::{Deserialize, Serialize};

/// Required macro-nutrients, per 100 g as published upstream
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl Macros {
    /// Scale values by a multiplier (e.g. grams / 100)
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories_kcal: self.calories_kcal * multiplier,
            protein_g: self.protein_g * multiplier,
            fat_g: self.fat_g * multiplier,
            carbs_g: self.carbs_g * multiplier,
        }
    }
}

impl std::ops::Mul<f64> for Macros {
    type Output = Macros;

    fn mul(self, multiplier: f64) -> Macros {
        self.scale(multiplier)
    }
}
