//! Print what the food database holds
//! Usage: cargo run --bin food_stats -- [SOURCE EXTERNAL_ID]

use fdc_import::config::ImportConfig;
use fdc_import::models::{Food, FoodPortion, Source};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let config = ImportConfig::from_env();
    println!("Database: {}", config.database_path.display());

    let database = fdc_import::db::Database::open_migrated(&config.database_path)?;

    database.with_conn(|conn| {
        for source in Source::ALL {
            println!("  {:<10} {:>7} foods", source.as_str(), Food::count_by_source(conn, source)?);
        }
        println!("  {:<10} {:>7} foods", "TOTAL", Food::count(conn)?);
        println!("  {:<10} {:>7} portions", "", FoodPortion::count(conn)?);

        let (Some(tag), Some(external_id)) = (args.get(1), args.get(2)) else {
            return Ok(());
        };
        let Some(source) = Source::from_str(tag) else {
            println!("\nUnknown source: {} (expected FOUNDATION or SR_LEGACY)", tag);
            return Ok(());
        };
        let Some(food) = Food::get_by_natural_key(conn, source, external_id)? else {
            println!("\nNo food {} / {}", source, external_id);
            return Ok(());
        };

        println!("\n{} [{} {}]", food.description, food.source, food.external_id);
        println!(
            "  per 100 g: {:.1} kcal, {:.1} g protein, {:.1} g fat, {:.1} g carbs",
            food.macros.calories_kcal, food.macros.protein_g, food.macros.fat_g, food.macros.carbs_g
        );
        for portion in FoodPortion::list_for_food(conn, food.id)? {
            let n = portion.nutrition(&food.macros);
            println!(
                "  {} {} ({:.1} g): {:.1} kcal, {:.1} g protein, {:.1} g fat, {:.1} g carbs",
                portion.amount, portion.unit, portion.gram_weight,
                n.calories_kcal, n.protein_g, n.fat_g, n.carbs_g
            );
        }

        Ok(())
    })?;

    Ok(())
}
