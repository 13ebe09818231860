//! Schedule export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use super::TableError;
use crate::schedule::{COLUMNS, ScheduleTable};

/// Write `table` as delimited text, header first.
///
/// Columns follow [`COLUMNS`]. Empty cells (including every non-aggregate
/// cell of a totals row) are written as empty strings.
pub fn write_schedule_csv<W: Write>(
    table: &ScheduleTable,
    writer: W,
    delimiter: u8,
) -> Result<(), TableError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(COLUMNS)?;
    for row in table {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render `table` as a delimited string.
pub fn schedule_to_csv_string(table: &ScheduleTable, delimiter: u8) -> Result<String, TableError> {
    let mut buf = Vec::new();
    write_schedule_csv(table, &mut buf, delimiter)?;
    Ok(String::from_utf8(buf)?)
}

/// Write `table` to a file, replacing it if it exists.
pub fn save_schedule_csv(path: &Path, table: &ScheduleTable, delimiter: u8) -> Result<(), TableError> {
    let file = File::create(path)?;
    write_schedule_csv(table, file, delimiter)?;
    debug!(path = %path.display(), rows = table.len(), "saved schedule");
    Ok(())
}
