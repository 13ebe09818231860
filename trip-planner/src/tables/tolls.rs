//! Toll table loader.
//!
//! One `origin,destination,toll` record per directed pair. Later records
//! replace earlier ones for the same pair.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{TableError, reader_builder};
use crate::costs::TollTable;

#[derive(Deserialize)]
struct TollRecord {
    origin: String,
    destination: String,
    toll: f64,
}

/// Load a toll table from any `Read` source.
pub fn load_tolls_reader<R: Read>(reader: R, delimiter: u8) -> Result<TollTable, TableError> {
    let mut csv_reader = reader_builder(delimiter).from_reader(reader);
    let mut table = TollTable::new();

    for (i, result) in csv_reader.deserialize::<TollRecord>().enumerate() {
        let rec = result?;
        if !rec.toll.is_finite() || rec.toll < 0.0 {
            return Err(TableError::row(
                i + 1,
                format!("toll must be finite and non-negative, got {}", rec.toll),
            ));
        }
        if let Some(previous) = table.insert(rec.origin.clone(), rec.destination.clone(), rec.toll) {
            debug!(
                origin = %rec.origin,
                destination = %rec.destination,
                previous,
                toll = rec.toll,
                "duplicate toll entry replaced"
            );
        }
    }

    Ok(table)
}

/// Load a toll table from a file.
pub fn load_tolls_csv(path: &Path, delimiter: u8) -> Result<TollTable, TableError> {
    let file = File::open(path)?;
    load_tolls_reader(file, delimiter)
}
