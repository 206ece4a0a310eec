//! Recognized nutrient names
//!
//! Maps upstream nutrient names onto the four required macro fields.

use std::collections::HashMap;

use crate::models::Macros;

/// One of the four required macro fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroField {
    Energy,
    Protein,
    Fat,
    Carbohydrate,
}

/// Immutable name -> field lookup, built once and handed to the normalizer
#[derive(Debug, Clone)]
pub struct NutrientTable {
    fields: HashMap<&'static str, MacroField>,
}

impl NutrientTable {
    /// Nutrient names as published in FoodData Central JSON downloads
    pub fn fdc() -> Self {
        let fields = HashMap::from([
            ("Energy", MacroField::Energy),
            ("Protein", MacroField::Protein),
            ("Total lipid (fat)", MacroField::Fat),
            ("Carbohydrate, by difference", MacroField::Carbohydrate),
        ]);
        Self { fields }
    }

    pub fn resolve(&self, name: &str) -> Option<MacroField> {
        self.fields.get(name).copied()
    }
}

/// Macros collected while scanning a nutrient list
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroAccumulator {
    calories_kcal: Option<f64>,
    protein_g: Option<f64>,
    fat_g: Option<f64>,
    carbs_g: Option<f64>,
}

impl MacroAccumulator {
    /// Record a value; a later value for the same field overwrites an earlier one
    pub fn set(&mut self, field: MacroField, value: f64) {
        let slot = match field {
            MacroField::Energy => &mut self.calories_kcal,
            MacroField::Protein => &mut self.protein_g,
            MacroField::Fat => &mut self.fat_g,
            MacroField::Carbohydrate => &mut self.carbs_g,
        };
        *slot = Some(value);
    }

    /// All four fields, or None if any is still unset
    pub fn complete(&self) -> Option<Macros> {
        Some(Macros {
            calories_kcal: self.calories_kcal?,
            protein_g: self.protein_g?,
            fat_g: self.fat_g?,
            carbs_g: self.carbs_g?,
        })
    }
}
