//! Dataset archive handling
//!
//! FoodData Central ships each dataset as a zip holding one JSON file.

use std::io::{Cursor, Read};

use super::error::{ImportError, ImportResult};

/// Local file header signature, plus the end-of-central-directory record
/// that starts an empty archive
const ZIP_SIGNATURES: [&[u8]; 2] = [b"PK\x03\x04", b"PK\x05\x06"];

pub fn is_zip(bytes: &[u8]) -> bool {
    ZIP_SIGNATURES.iter().any(|sig| bytes.starts_with(sig))
}

/// Return the dataset's JSON text.
///
/// Zip archives yield their first `.json` entry; anything else is taken to
/// be the JSON document itself.
pub fn read_json_entry(bytes: Vec<u8>) -> ImportResult<String> {
    let text = if is_zip(&bytes) {
        read_first_json_entry(&bytes)?
    } else {
        String::from_utf8(bytes)?
    };

    Ok(strip_bom(&text).trim().to_string())
}

fn read_first_json_entry(bytes: &[u8]) -> ImportResult<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.is_dir() || !file.name().to_lowercase().ends_with(".json") {
            continue;
        }

        tracing::info!("Extracting {} ({} bytes)", file.name(), file.size());
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        return Ok(text);
    }

    Err(ImportError::NoJsonEntry)
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn zip_with(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, body) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_reads_first_json_entry() {
        let bytes = zip_with(&[
            ("README.txt", "not this"),
            ("FoodData_Central_foundation_food_json.JSON", "  {\"FoundationFoods\": []}\n"),
            ("other.json", "[]"),
        ]);

        let text = read_json_entry(bytes).unwrap();
        assert_eq!(text, "{\"FoundationFoods\": []}");
    }

    #[test]
    fn test_zip_without_json_is_an_error() {
        let bytes = zip_with(&[("README.txt", "nothing here")]);
        assert!(matches!(read_json_entry(bytes), Err(ImportError::NoJsonEntry)));
    }

    #[test]
    fn test_plain_json_passes_through() {
        let bytes = "\u{feff}[{\"fdcId\": 1}]".as_bytes().to_vec();
        assert_eq!(read_json_entry(bytes).unwrap(), "[{\"fdcId\": 1}]");
    }

    #[test]
    fn test_whitespace_after_bom_is_trimmed() {
        let bytes = "\u{feff}\n  {\"foods\": []}\n".as_bytes().to_vec();
        assert_eq!(read_json_entry(bytes).unwrap(), "{\"foods\": []}");
    }

    #[test]
    fn test_reads_larger_entry_without_size_hint() {
        let body = format!("[{}]", vec!["{\"fdcId\": 1}"; 5000].join(","));
        let bytes = zip_with(&[("foods.json", &body)]);
        assert_eq!(read_json_entry(bytes).unwrap(), body);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes = vec![0xff, 0xfe, 0x00];
        assert!(matches!(read_json_entry(bytes), Err(ImportError::Encoding(_))));
    }
}
