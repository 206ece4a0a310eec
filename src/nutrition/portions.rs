//! Portion normalization
//!
//! Turns an upstream `foodPortions` list into gram-mapped portions.

use serde_json::Value;

use crate::models::Portion;
use super::fields::{number, text};

/// Label used when a portion carries no description of its own
pub const FALLBACK_UNIT: &str = "serving";

/// Normalize a raw portion list.
///
/// Entries without a positive gram weight are dropped. The result may be
/// empty; rejecting the food in that case is the caller's job.
pub fn normalize_portions(raw_portions: &[Value]) -> Vec<Portion> {
    raw_portions.iter().filter_map(normalize_portion).collect()
}

fn normalize_portion(raw: &Value) -> Option<Portion> {
    let gram_weight = number(raw.get("gramWeight")).filter(|g| *g > 0.0)?;

    // Descriptive text beats codes; every kept portion gets some label.
    let unit = text(raw.get("portionDescription"))
        .or_else(|| text(raw.get("modifier")))
        .or_else(|| text(raw.get("measureUnit").and_then(|m| m.get("name"))))
        .unwrap_or_else(|| FALLBACK_UNIT.to_string());

    let amount = number(raw.get("amount"))
        .filter(|a| *a > 0.0)
        .unwrap_or(1.0);

    Some(Portion {
        amount,
        unit,
        gram_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drops_non_positive_and_missing_gram_weight() {
        let raw = json!([
            {"gramWeight": 0, "modifier": "zero"},
            {"gramWeight": -5, "modifier": "negative"},
            {"modifier": "missing"},
            {"gramWeight": null, "modifier": "null"},
            {"gramWeight": 12.5, "modifier": "kept"}
        ]);

        let portions = normalize_portions(raw.as_array().unwrap());
        assert_eq!(portions.len(), 1);
        assert_eq!(portions[0].unit, "kept");
        assert_eq!(portions[0].gram_weight, 12.5);
    }

    #[test]
    fn test_label_priority() {
        let raw = json!([
            {"gramWeight": 28.35, "portionDescription": null, "modifier": "1 slice", "measureUnit": {"name": "oz"}},
            {"gramWeight": 10, "portionDescription": "1 pat", "modifier": "pat", "measureUnit": {"name": "oz"}},
            {"gramWeight": 10, "portionDescription": "", "modifier": "", "measureUnit": {"name": "cup"}},
            {"gramWeight": 10, "measureUnit": {}},
            {"gramWeight": 10}
        ]);

        let units: Vec<String> = normalize_portions(raw.as_array().unwrap())
            .into_iter()
            .map(|p| p.unit)
            .collect();
        assert_eq!(units, vec!["1 slice", "1 pat", "cup", "serving", "serving"]);
    }

    #[test]
    fn test_amount_defaults_to_one() {
        let raw = json!([
            {"gramWeight": 244, "amount": 2},
            {"gramWeight": 244},
            {"gramWeight": 244, "amount": null}
        ]);

        let amounts: Vec<f64> = normalize_portions(raw.as_array().unwrap())
            .iter()
            .map(|p| p.amount)
            .collect();
        assert_eq!(amounts, vec![2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_duplicate_portions_are_kept() {
        let raw = json!([
            {"gramWeight": 15, "modifier": "tbsp"},
            {"gramWeight": 15, "modifier": "tbsp"}
        ]);
        assert_eq!(normalize_portions(raw.as_array().unwrap()).len(), 2);
    }
}
