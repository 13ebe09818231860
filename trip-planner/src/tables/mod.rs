//! Delimited-text tables.
//!
//! Export of schedule tables and ingestion of candidate routes and toll
//! estimates. Timestamps in input files must already be in one of the forms
//! accepted by [`crate::domain::Timestamp::parse`].

mod error;
mod export;
mod routes;
mod tolls;

pub use error::TableError;
pub use export::{save_schedule_csv, schedule_to_csv_string, write_schedule_csv};
pub use routes::{load_routes_csv, load_routes_reader};
pub use tolls::{load_tolls_csv, load_tolls_reader};

/// Build a CSV reader with the conventions shared by every loader.
fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.delimiter(delimiter).trim(csv::Trim::All);
    builder
}
