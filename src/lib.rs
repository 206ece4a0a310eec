//! FoodData Central Import Library
//!
//! Normalizes USDA FoodData Central JSON datasets and reconciles them into
//! a local SQLite food database.

pub mod build_info;
pub mod config;
pub mod db;
pub mod import;
pub mod models;
pub mod nutrition;
