//! Raw record extraction
//!
//! FoodData Central publishes its JSON downloads in several shapes: a bare
//! array, an object wrapping the array under a dataset-specific key, or
//! newline-delimited records. Shapes are tried in a fixed order and the
//! first one that matches wins.

use std::fmt;

use serde_json::Value;

/// Wrapper keys used by the published downloads, checked in this order
pub const CONTAINER_KEYS: &[&str] = &[
    "FoundationFoods",
    "SRLegacyFoods",
    "SurveyFoods",
    "FoodNutrients",
    "foods",
    "Foods",
];

/// How the records were found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordShape {
    TopLevelArray,
    Container(String),
    SingleRecord,
    SoleArrayField(String),
    Ndjson,
    Unrecognized,
}

impl fmt::Display for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordShape::TopLevelArray => write!(f, "top-level array"),
            RecordShape::Container(key) => write!(f, "container key '{}'", key),
            RecordShape::SingleRecord => write!(f, "single record"),
            RecordShape::SoleArrayField(key) => write!(f, "sole array field '{}'", key),
            RecordShape::Ndjson => write!(f, "newline-delimited records"),
            RecordShape::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Records pulled out of a dataset document
#[derive(Debug)]
pub struct Extraction {
    pub shape: RecordShape,
    pub records: Vec<Value>,
}

type Detector = fn(&mut Value) -> Option<(RecordShape, Vec<Value>)>;

const DETECTORS: &[Detector] = &[
    top_level_array,
    container_key,
    single_record,
    sole_array_field,
];

/// Extract raw food records from decompressed dataset text
pub fn extract_records(text: &str) -> Extraction {
    let mut doc = match serde_json::from_str::<Value>(text) {
        Ok(doc) => doc,
        Err(_) => {
            return Extraction {
                shape: RecordShape::Ndjson,
                records: parse_ndjson(text),
            }
        }
    };

    let (shape, records) = DETECTORS
        .iter()
        .find_map(|detect| detect(&mut doc))
        .unwrap_or((RecordShape::Unrecognized, Vec::new()));

    Extraction { shape, records }
}

fn top_level_array(doc: &mut Value) -> Option<(RecordShape, Vec<Value>)> {
    let items = doc.as_array_mut()?;
    Some((RecordShape::TopLevelArray, std::mem::take(items)))
}

fn container_key(doc: &mut Value) -> Option<(RecordShape, Vec<Value>)> {
    let object = doc.as_object_mut()?;
    CONTAINER_KEYS.iter().find_map(|key| {
        let items = object.get_mut(*key)?.as_array_mut()?;
        Some((RecordShape::Container(key.to_string()), std::mem::take(items)))
    })
}

/// A lone food object, e.g. a one-line NDJSON file
fn single_record(doc: &mut Value) -> Option<(RecordShape, Vec<Value>)> {
    let object = doc.as_object()?;
    if !object.contains_key("fdcId") {
        return None;
    }
    Some((RecordShape::SingleRecord, vec![doc.take()]))
}

fn sole_array_field(doc: &mut Value) -> Option<(RecordShape, Vec<Value>)> {
    let object = doc.as_object_mut()?;
    let mut arrays = object.iter_mut().filter(|(_, v)| v.is_array());
    let (key, value) = arrays.next()?;
    if arrays.next().is_some() {
        return None;
    }
    let key = key.clone();
    let items = value.as_array_mut().map(std::mem::take)?;
    Some((RecordShape::SoleArrayField(key), items))
}

/// One JSON value per line; blank and unparseable lines are skipped
fn parse_ndjson(text: &str) -> Vec<Value> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_array() {
        let out = extract_records(r#"[{"fdcId": 1}, {"fdcId": 2}]"#);
        assert_eq!(out.shape, RecordShape::TopLevelArray);
        assert_eq!(out.records.len(), 2);
    }

    #[test]
    fn test_container_keys_in_priority_order() {
        let out = extract_records(r#"{"foods": [{"fdcId": 9}], "FoundationFoods": [{"fdcId": 1}, {"fdcId": 2}]}"#);
        assert_eq!(out.shape, RecordShape::Container("FoundationFoods".to_string()));
        assert_eq!(out.records.len(), 2);

        let out = extract_records(r#"{"SRLegacyFoods": [{"fdcId": 1}]}"#);
        assert_eq!(out.shape, RecordShape::Container("SRLegacyFoods".to_string()));
    }

    #[test]
    fn test_container_key_must_hold_an_array() {
        let out = extract_records(r#"{"foods": "none", "items": [{"fdcId": 1}]}"#);
        assert_eq!(out.shape, RecordShape::SoleArrayField("items".to_string()));
        assert_eq!(out.records.len(), 1);
    }

    #[test]
    fn test_single_record_is_not_mistaken_for_a_container() {
        let out = extract_records(r#"{"fdcId": 5, "foodNutrients": [{"amount": 1}]}"#);
        assert_eq!(out.shape, RecordShape::SingleRecord);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0]["fdcId"], 5);
    }

    #[test]
    fn test_ambiguous_object_is_unrecognized() {
        let out = extract_records(r#"{"a": [1], "b": [2]}"#);
        assert_eq!(out.shape, RecordShape::Unrecognized);
        assert!(out.records.is_empty());
    }

    #[test]
    fn test_ndjson_fallback_skips_bad_lines() {
        let text = "{\"fdcId\": 1}\n\n{not json}\n{\"fdcId\": 2}\n";
        let out = extract_records(text);
        assert_eq!(out.shape, RecordShape::Ndjson);
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.records[1]["fdcId"], 2);
    }
}
