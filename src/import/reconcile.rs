//! Reconciliation of normalized foods into the store
//!
//! Foods are upserted by natural key and their portions replaced wholesale,
//! all inside one transaction per batch.

use rusqlite::Connection;
use serde::Serialize;

use crate::db::DbResult;
use crate::models::{Food, FoodPortion, NormalizedFood};

/// Row counts from one batch upsert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpsertSummary {
    pub foods_written: usize,
    pub inserted: usize,
    pub updated: usize,
    pub portions_written: usize,
}

/// Persist a batch of foods.
///
/// Any storage error rolls back the whole batch. A natural key repeated
/// within the batch is written twice; the later entry wins.
pub fn upsert_batch(conn: &mut Connection, foods: &[NormalizedFood]) -> DbResult<UpsertSummary> {
    let tx = conn.transaction()?;
    let before = Food::count(&tx)?;

    let mut summary = UpsertSummary::default();
    for food in foods {
        let food_id = Food::upsert(&tx, food)?;
        summary.portions_written += FoodPortion::replace_for_food(&tx, food_id, &food.portions)?;
        summary.foods_written += 1;
    }

    let after = Food::count(&tx)?;
    tx.commit()?;

    summary.inserted = (after - before).max(0) as usize;
    summary.updated = summary.foods_written - summary.inserted;
    Ok(summary)
}
