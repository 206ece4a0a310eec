//! Food Portion model
//!
//! Serving sizes mapped to grams, owned by a single food.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use super::Macros;

/// A normalized serving size: `amount` of `unit` weighs `gram_weight` grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    pub amount: f64,
    pub unit: String,
    pub gram_weight: f64,
}

/// A stored portion row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPortion {
    pub id: i64,
    pub food_id: i64,
    pub amount: f64,
    pub unit: String,
    pub gram_weight: f64,
}

impl FoodPortion {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            food_id: row.get("food_id")?,
            amount: row.get("amount")?,
            unit: row.get("unit")?,
            gram_weight: row.get("gram_weight")?,
        })
    }

    /// Macros for this portion, given the food's per-100 g values
    pub fn nutrition(&self, per_100g: &Macros) -> Macros {
        *per_100g * (self.gram_weight / 100.0)
    }

    /// Replace every portion of a food with `portions`.
    ///
    /// Callers run this inside the same transaction as the food upsert.
    pub fn replace_for_food(conn: &Connection, food_id: i64, portions: &[Portion]) -> DbResult<usize> {
        conn.execute("DELETE FROM food_portions WHERE food_id = ?1", [food_id])?;

        let mut stmt = conn.prepare_cached(
            r#"
            INSERT INTO food_portions (food_id, amount, unit, gram_weight)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )?;
        for portion in portions {
            stmt.execute(params![food_id, portion.amount, portion.unit, portion.gram_weight])?;
        }

        Ok(portions.len())
    }

    /// List a food's portions in insertion order
    pub fn list_for_food(conn: &Connection, food_id: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM food_portions WHERE food_id = ?1 ORDER BY id ASC"
        )?;

        let portions = stmt
            .query_map([food_id], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(portions)
    }

    /// Count all stored portions
    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM food_portions", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn setup_with_food() -> (Connection, i64) {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn.execute(
            "INSERT INTO foods (source, external_id, calories_kcal, protein_g, fat_g, carbs_g)
             VALUES ('FOUNDATION', '1', 100, 10, 5, 20)",
            [],
        )
        .unwrap();
        let id = conn.last_insert_rowid();
        (conn, id)
    }

    fn portion(unit: &str, gram_weight: f64) -> Portion {
        Portion {
            amount: 1.0,
            unit: unit.to_string(),
            gram_weight,
        }
    }

    #[test]
    fn test_replace_for_food_drops_old_portions() {
        let (conn, food_id) = setup_with_food();

        FoodPortion::replace_for_food(&conn, food_id, &[portion("cup", 244.0), portion("tbsp", 15.0)])
            .unwrap();
        FoodPortion::replace_for_food(&conn, food_id, &[portion("slice", 28.0)]).unwrap();

        let stored = FoodPortion::list_for_food(&conn, food_id).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].unit, "slice");
        assert_eq!(FoodPortion::count(&conn).unwrap(), 1);
    }

    #[test]
    fn test_portion_nutrition_scales_from_100g() {
        let stored = FoodPortion {
            id: 1,
            food_id: 1,
            amount: 1.0,
            unit: "cup".to_string(),
            gram_weight: 244.0,
        };
        let per_100g = Macros {
            calories_kcal: 61.0,
            protein_g: 3.2,
            fat_g: 3.3,
            carbs_g: 4.8,
        };

        let cup = stored.nutrition(&per_100g);
        assert!((cup.calories_kcal - 148.84).abs() < 0.001);
        assert!((cup.protein_g - 7.808).abs() < 0.001);
    }
}
