//! Food model
//!
//! A food keyed by (source, external_id) with its required macros.

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use super::{Macros, Portion, Source};

/// A food produced by normalization, ready to be reconciled into the store.
///
/// Only the normalizer constructs these, so `portions` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFood {
    pub source: Source,
    pub external_id: String,
    pub description: String,
    pub macros: Macros,
    pub portions: Vec<Portion>,
}

/// A food as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub source: Source,
    pub external_id: String,
    pub description: String,
    pub macros: Macros,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Food {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let tag: String = row.get("source")?;
        let source = Source::from_str(&tag).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                format!("unknown source tag: {}", tag).into(),
            )
        })?;

        Ok(Self {
            id: row.get("id")?,
            source,
            external_id: row.get("external_id")?,
            description: row.get("description")?,
            macros: Macros {
                calories_kcal: row.get("calories_kcal")?,
                protein_g: row.get("protein_g")?,
                fat_g: row.get("fat_g")?,
                carbs_g: row.get("carbs_g")?,
            },
            is_active: row.get::<_, i64>("is_active")? != 0,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Insert or overwrite a food by natural key, returning its row id.
    ///
    /// Existing rows keep their id, `is_active` flag and `created_at`; the
    /// description and macros are replaced with the incoming values.
    pub fn upsert(conn: &Connection, food: &NormalizedFood) -> DbResult<i64> {
        let id = conn.query_row(
            r#"
            INSERT INTO foods (
                source, external_id, description,
                calories_kcal, protein_g, fat_g, carbs_g
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(source, external_id) DO UPDATE SET
                description = excluded.description,
                calories_kcal = excluded.calories_kcal,
                protein_g = excluded.protein_g,
                fat_g = excluded.fat_g,
                carbs_g = excluded.carbs_g,
                updated_at = datetime('now')
            RETURNING id
            "#,
            params![
                food.source.as_str(),
                food.external_id,
                food.description,
                food.macros.calories_kcal,
                food.macros.protein_g,
                food.macros.fat_g,
                food.macros.carbs_g,
            ],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Get a food by its natural key
    pub fn get_by_natural_key(
        conn: &Connection,
        source: Source,
        external_id: &str,
    ) -> DbResult<Option<Self>> {
        let food = conn
            .query_row(
                "SELECT * FROM foods WHERE source = ?1 AND external_id = ?2",
                params![source.as_str(), external_id],
                Self::from_row,
            )
            .optional()?;
        Ok(food)
    }

    /// Count stored foods
    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM foods", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Count stored foods for one source
    pub fn count_by_source(conn: &Connection, source: Source) -> DbResult<i64> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM foods WHERE source = ?1",
            [source.as_str()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
