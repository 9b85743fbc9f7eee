//! CSV ingestion for property definitions (read side only).
//!
//! Converts a CSV file (or in-memory reader) into [`PropertyRequest`] values.
//! No network calls, no reconciliation; callers hand the resulting rows to
//! the reconcile engine.
//!
//! ## CSV column contract (case-insensitive, order-independent)
//!
//! | Column             | Example            | Notes                          |
//! |--------------------|--------------------|--------------------------------|
//! | `Property Name`    | `VIP Status`       | Human label                    |
//! | `Property Type`    | `Single Checkbox`  | Must be in the type table      |
//! | `Property Options` | `"Red, Blue"`      | Comma-separated; quoted        |
//! | `Object Type`      | `Contact`          |                                |
//!
//! Field values are trimmed. Option lists contain commas, so the file relies
//! on standard CSV quoting, handled by the `csv` crate rather than by hand.

use std::fmt;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;

use crate::payload::PropertyRequest;

/// Required header columns, in documentation order.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Property Name",
    "Property Type",
    "Property Options",
    "Object Type",
];

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced by CSV ingestion. All are structural and fatal to the run;
/// per-row semantic problems (unknown types etc.) are the engine's concern.
#[derive(Debug)]
pub enum CsvIngestError {
    /// An I/O or CSV-format error.
    Io(String),
    /// The header row is missing a required column.
    MissingHeader(String),
}

impl fmt::Display for CsvIngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvIngestError::Io(msg) => write!(f, "csv io error: {msg}"),
            CsvIngestError::MissingHeader(col) => {
                write!(f, "csv missing required header column: '{col}'")
            }
        }
    }
}

impl std::error::Error for CsvIngestError {}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Read the property-definition CSV at `path`.
pub fn read_property_csv(path: &Path) -> Result<Vec<PropertyRequest>, CsvIngestError> {
    let file = std::fs::File::open(path)
        .map_err(|e| CsvIngestError::Io(format!("open '{}': {e}", path.display())))?;
    read_property_rows(file)
}

/// Read property-definition rows from any reader (useful for tests).
///
/// Header lookup is case-insensitive and order-independent; a missing
/// required column is a [`CsvIngestError::MissingHeader`]. Rows shorter than
/// the header are padded with empty fields rather than rejected, mirroring
/// how spreadsheet exports drop trailing empty cells.
pub fn read_property_rows<R: io::Read>(rdr: R) -> Result<Vec<PropertyRequest>, CsvIngestError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);

    let headers = reader
        .headers()
        .map_err(|e| CsvIngestError::Io(format!("read headers: {e}")))?
        .clone();

    let mut idx = [0usize; 4];
    for (slot, required) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(required))
            .ok_or_else(|| CsvIngestError::MissingHeader(required.to_string()))?;
    }
    let [name_i, type_i, options_i, object_i] = idx;

    let mut out = Vec::new();
    for (row_num, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| CsvIngestError::Io(format!("parse row {}: {e}", row_num + 1)))?;

        let get = |i: usize| record.get(i).unwrap_or("").trim().to_string();

        out.push(PropertyRequest {
            name: get(name_i),
            property_type: get(type_i),
            options: get(options_i),
            object_type: get(object_i),
        });
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
