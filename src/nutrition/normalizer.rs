//! Food normalization
//!
//! Converts one raw FoodData Central record into a `NormalizedFood`, or
//! rejects it. Rejections are ordinary outcomes, not errors: the pipeline
//! only counts them.

use std::fmt;

use serde_json::Value;

use crate::models::{NormalizedFood, Source};
use super::fields::{array, number, text};
use super::nutrients::{MacroAccumulator, MacroField, NutrientTable};
use super::portions::normalize_portions;
use super::units::EnergyUnit;

/// Why a record was left out of the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rejection {
    /// No usable `fdcId`, so the record has no natural key
    MissingIdentifier,
    /// At least one of the four macros is absent
    IncompleteNutrients,
    /// No portion with a positive gram weight
    NoUsablePortions,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::MissingIdentifier => "missing_identifier",
            Rejection::IncompleteNutrients => "incomplete_nutrients",
            Rejection::NoUsablePortions => "no_usable_portions",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record normalizer bound to a nutrient lookup table
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    table: &'a NutrientTable,
}

impl<'a> Normalizer<'a> {
    pub fn new(table: &'a NutrientTable) -> Self {
        Self { table }
    }

    /// Normalize one raw record for `source`
    pub fn normalize(&self, raw: &Value, source: Source) -> Result<NormalizedFood, Rejection> {
        let external_id = external_id(raw.get("fdcId")).ok_or(Rejection::MissingIdentifier)?;

        let description = raw
            .get("description")
            .and_then(Value::as_str)
            .map(title_case)
            .unwrap_or_default();

        let macros = self
            .scan_nutrients(array(raw.get("foodNutrients")))
            .complete()
            .ok_or(Rejection::IncompleteNutrients)?;

        let portions = normalize_portions(array(raw.get("foodPortions")));
        if portions.is_empty() {
            return Err(Rejection::NoUsablePortions);
        }

        Ok(NormalizedFood {
            source,
            external_id,
            description,
            macros,
            portions,
        })
    }

    fn scan_nutrients(&self, entries: &[Value]) -> MacroAccumulator {
        let mut acc = MacroAccumulator::default();

        for entry in entries {
            let nutrient = entry.get("nutrient");
            let Some(field) = nutrient
                .and_then(|n| n.get("name"))
                .and_then(Value::as_str)
                .and_then(|name| self.table.resolve(name))
            else {
                continue;
            };
            let Some(amount) = number(entry.get("amount")) else {
                continue;
            };

            let value = match field {
                MacroField::Energy => {
                    let unit = nutrient.and_then(|n| n.get("unitName")).and_then(Value::as_str);
                    EnergyUnit::from_unit_name(unit).to_kcal(amount)
                }
                _ => amount,
            };
            acc.set(field, value);
        }

        acc
    }
}

/// Upstream identifier as text, verbatim; numbers keep their JSON rendering
fn external_id(value: Option<&Value>) -> Option<String> {
    text(value)
}

/// Capitalize the first letter of each word and lowercase the rest.
///
/// A word starts after any character that is not alphanumeric, so
/// "CHEESE,CHEDDAR" becomes "Cheese,Cheddar" and "2nd" stays "2nd".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = !c.is_alphanumeric();
    }

    out
}
