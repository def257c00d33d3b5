//! Tab-separated dataset reader and bulk body rendering.
//!
//! Rows carry `id, name, address, phone, longitude, latitude`. Each row
//! becomes one action line and one document line in the engine's bulk
//! format.

use crate::core::error::{PlacesError, Result};
use crate::core::types::{Location, Place};
use serde_json::json;
use std::io::Read;
use std::path::Path;

const COLUMNS: usize = 6;

/// One dataset row
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRecord {
    pub id: String,
    pub place: Place,
}

/// Parsed dataset plus the rows that could not be used
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<DatasetRecord>,
    pub skipped: usize,
}

/// Rendered bulk request body
#[derive(Debug, Clone)]
pub struct BulkPayload {
    pub body: Vec<u8>,
    pub documents: usize,
    pub skipped: usize,
}

/// Read the dataset file at `path`
pub fn read_dataset(path: &Path, has_headers: bool) -> Result<Dataset> {
    let file = std::fs::File::open(path).map_err(|e| {
        PlacesError::Dataset(format!("cannot open {}: {e}", path.display()))
    })?;
    parse_dataset(file, has_headers)
}

/// Parse tab-separated rows from any reader
pub fn parse_dataset<R: Read>(reader: R, has_headers: bool) -> Result<Dataset> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut dataset = Dataset::default();

    for (line, row) in csv.records().enumerate() {
        let row = row?;

        if row.len() < COLUMNS {
            tracing::warn!(line, columns = row.len(), "Skipping short dataset row");
            dataset.skipped += 1;
            continue;
        }

        let lon = row[4].trim().parse::<f64>();
        let lat = row[5].trim().parse::<f64>();
        let (lon, lat) = match (lon, lat) {
            (Ok(lon), Ok(lat)) => (lon, lat),
            _ => {
                tracing::warn!(line, id = &row[0], "Skipping row with unparsable coordinates");
                dataset.skipped += 1;
                continue;
            }
        };

        dataset.records.push(DatasetRecord {
            id: row[0].to_string(),
            place: Place {
                name: row[1].to_string(),
                address: row[2].to_string(),
                phone: row[3].to_string(),
                location: Location { lat, lon },
            },
        });
    }

    Ok(dataset)
}

/// Render records as newline-delimited bulk actions for `index`
pub fn to_bulk_body(index: &str, dataset: &Dataset) -> Result<BulkPayload> {
    let mut body = Vec::new();

    for record in &dataset.records {
        let action = json!({ "index": { "_index": index, "_id": record.id } });
        serde_json::to_writer(&mut body, &action)?;
        body.push(b'\n');
        serde_json::to_writer(&mut body, &record.place)?;
        body.push(b'\n');
    }

    Ok(BulkPayload {
        body,
        documents: dataset.records.len(),
        skipped: dataset.skipped,
    })
}
