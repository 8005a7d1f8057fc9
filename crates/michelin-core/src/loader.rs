// crates/michelin-core/src/loader.rs

//! # Data Loader
//!
//! Reads gazetteer and restaurant tables from JSON arrays of records.
//! Files ending in `.gz` are decompressed when the `compact` feature is on.

use crate::error::{MatchError, Result};
use crate::gazetteer::GazetteerEntry;
use crate::restaurant::Restaurant;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_GAZETTEER_FILE: &str = "gazetteer.sample.json";
pub const DEFAULT_RESTAURANTS_FILE: &str = "restaurants.sample.json";

/// Columns every gazetteer row must carry (values may be null).
pub const REQUIRED_GAZETTEER_COLUMNS: [&str; 2] = ["location", "capital"];

/// Directory holding the bundled sample tables.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load a gazetteer from a `.json` (or `.json.gz`) file.
pub fn load_gazetteer(path: impl AsRef<Path>) -> Result<Vec<GazetteerEntry>> {
    let path = path.as_ref();
    let rows = gazetteer_from_reader(open_stream(path)?)?;
    info!(path = %path.display(), rows = rows.len(), "loaded gazetteer");
    Ok(rows)
}

/// Load the restaurant table from a `.json` (or `.json.gz`) file.
pub fn load_restaurants(path: impl AsRef<Path>) -> Result<Vec<Restaurant>> {
    let path = path.as_ref();
    let rows = restaurants_from_reader(open_stream(path)?)?;
    info!(path = %path.display(), rows = rows.len(), "loaded restaurants");
    Ok(rows)
}

/// Parse gazetteer rows, rejecting rows that lack a required column.
pub fn gazetteer_from_reader(reader: impl Read) -> Result<Vec<GazetteerEntry>> {
    let raw: Vec<Value> = serde_json::from_reader(reader)?;
    raw.into_iter()
        .enumerate()
        .map(|(row, value)| {
            for column in REQUIRED_GAZETTEER_COLUMNS {
                if value.get(column).is_none() {
                    return Err(MatchError::MissingColumn { row, column });
                }
            }
            Ok(serde_json::from_value::<GazetteerEntry>(value)?)
        })
        .collect()
}

pub fn restaurants_from_reader(reader: impl Read) -> Result<Vec<Restaurant>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Opens a file, buffers it, and unwraps gzip for `.gz` paths.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        MatchError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    #[cfg(feature = "compact")]
    {
        if gzipped {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    #[cfg(not(feature = "compact"))]
    {
        if gzipped {
            return Err(MatchError::NotFound(format!(
                "{} is gzip-compressed; enable the 'compact' feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::Rating;

    #[test]
    fn reads_gazetteer_rows() {
        let json = r#"[
            {"location": "Lyon, 69001", "region": "Auvergne-Rhône-Alpes", "department": "Rhône", "capital": "Lyon"},
            {"location": null, "region": "Corse", "department": "Haute-Corse", "capital": null}
        ]"#;
        let rows = gazetteer_from_reader(json.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city(), Some("Lyon"));
        assert_eq!(rows[1].location, None);
    }

    #[test]
    fn missing_column_is_an_error() {
        let json = r#"[
            {"location": "Lyon", "capital": "Lyon"},
            {"location": "Nice", "region": "PACA"}
        ]"#;
        let err = gazetteer_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            MatchError::MissingColumn { row: 1, column: "capital" }
        ));
    }

    #[test]
    fn reads_restaurants() {
        let json = r#"[{
            "name": "Mirazur", "stars": 3, "location": "Menton, 06500",
            "department": "Alpes-Maritimes", "department_num": "06",
            "region": "Provence-Alpes-Côte d'Azur"
        }]"#;
        let rows = restaurants_from_reader(json.as_bytes()).unwrap();
        assert_eq!(rows[0].stars, Rating::ThreeStars);
    }

    #[test]
    fn bundled_samples_load() {
        let dir = default_data_dir();
        assert!(!load_gazetteer(dir.join(DEFAULT_GAZETTEER_FILE)).unwrap().is_empty());
        assert!(!load_restaurants(dir.join(DEFAULT_RESTAURANTS_FILE)).unwrap().is_empty());
    }

    const GAZETTEER_JSON: &str = r#"[
        {"location": "Cancale, 35260", "region": "Bretagne", "department": "Ille-et-Vilaine", "capital": "Rennes"},
        {"location": "Reims, 51100", "region": "Grand Est", "department": "Marne", "capital": "Châlons-en-Champagne"}
    ]"#;

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzipped_gazetteer() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gazetteer.json.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(GAZETTEER_JSON.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let rows = load_gazetteer(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city(), Some("Cancale"));
        assert_eq!(rows[1].department, "Marne");
    }

    #[test]
    fn plain_json_is_not_gunzipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gazetteer.json");
        std::fs::write(&path, GAZETTEER_JSON).unwrap();
        assert_eq!(load_gazetteer(&path).unwrap().len(), 2);
    }

    #[cfg(not(feature = "compact"))]
    #[test]
    fn gzip_requires_compact_feature() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gazetteer.json.gz");
        std::fs::write(&path, GAZETTEER_JSON).unwrap();
        let err = load_gazetteer(&path).unwrap_err();
        assert!(matches!(&err, MatchError::NotFound(msg) if msg.contains("compact")));
    }

    #[test]
    fn missing_file_reports_not_found() {
        let err = load_gazetteer("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, MatchError::NotFound(_)));
    }
}
