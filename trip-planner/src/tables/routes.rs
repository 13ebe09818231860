//! Candidate route loader.
//!
//! # CSV format
//!
//! ```csv
//! departure,distance_km,payout,rate_per_km,origin,destination
//! 2025-07-12 06:00,412.5,980.00,2.38,Lyon,Milano
//! 2025-07-12 09:30,220,505.5,,Lyon,Torino
//! ```
//!
//! `rate_per_km`, `origin` and `destination` are optional; a missing rate is
//! derived from payout / distance. Dispatcher exports using the headers
//! `Data/Ora Partenza`, `Distanza`, `Compenso (€)`, `€/km`, `Origine` and
//! `Destinazione` are read as well. Unknown columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{TableError, reader_builder};
use crate::domain::{CandidateRoute, Timestamp};

#[derive(Deserialize)]
struct RouteRecord {
    #[serde(alias = "Data/Ora Partenza")]
    departure: String,
    #[serde(alias = "Distanza")]
    distance_km: f64,
    #[serde(alias = "Compenso (€)")]
    payout: f64,
    #[serde(default, alias = "€/km")]
    rate_per_km: Option<f64>,
    #[serde(default, alias = "Origine")]
    origin: Option<String>,
    #[serde(default, alias = "Destinazione")]
    destination: Option<String>,
}

impl RouteRecord {
    fn into_route(self, record: usize) -> Result<CandidateRoute, TableError> {
        let departure =
            Timestamp::parse(&self.departure).map_err(|e| TableError::row(record, e))?;
        let mut route =
            CandidateRoute::new(departure, self.distance_km, self.payout, self.rate_per_km)
                .map_err(|e| TableError::row(record, e))?;
        route.origin = self.origin.filter(|s| !s.is_empty());
        route.destination = self.destination.filter(|s| !s.is_empty());
        Ok(route)
    }
}

/// Load candidate routes from any `Read` source.
///
/// Records are numbered from 1, excluding the header.
pub fn load_routes_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<CandidateRoute>, TableError> {
    let mut csv_reader = reader_builder(delimiter).from_reader(reader);

    let routes = csv_reader
        .deserialize::<RouteRecord>()
        .enumerate()
        .map(|(i, result)| result?.into_route(i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(routes = routes.len(), "loaded candidate routes");
    Ok(routes)
}

/// Load candidate routes from a file.
pub fn load_routes_csv(path: &Path, delimiter: u8) -> Result<Vec<CandidateRoute>, TableError> {
    let file = File::open(path)?;
    load_routes_reader(file, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(data: &str) -> Result<Vec<CandidateRoute>, TableError> {
        load_routes_reader(Cursor::new(data), b',')
    }

    #[test]
    fn load_basic() {
        let routes = load(
            "departure,distance_km,payout,rate_per_km,origin,destination\n\
             2025-07-12 06:00,412.5,980.00,2.38,Lyon,Milano\n\
             2025-07-12 09:30,220,505.5,,Lyon,Torino\n",
        )
        .unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].departure(), Timestamp::parse("2025-07-12 06:00").unwrap());
        assert_eq!(routes[0].rate_per_km(), Some(2.38));
        assert_eq!(routes[0].destination.as_deref(), Some("Milano"));
        // Missing rate derived
        assert_eq!(routes[1].rate_per_km(), Some(505.5 / 220.0));
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let routes = load("departure,distance_km,payout\n2025-07-12 06:00,100,250\n").unwrap();
        assert_eq!(routes[0].rate_per_km(), Some(2.5));
        assert_eq!(routes[0].origin, None);
    }

    #[test]
    fn legacy_headers_and_semicolons() {
        let data = "Data/Ora Partenza;Origine;Destinazione;Distanza;Compenso (€);€/km\n\
                    2025-07-12T07:15:00; Lyon ; Milano ;412.5;980;2.38\n";
        let routes = load_routes_reader(Cursor::new(data), b';').unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].origin.as_deref(), Some("Lyon"));
        assert_eq!(routes[0].payout(), 980.0);
        assert_eq!(routes[0].departure().to_string(), "2025-07-12 07:15");
    }

    #[test]
    fn empty_file_has_no_routes() {
        assert!(load("departure,distance_km,payout\n").unwrap().is_empty());
        assert!(load("").unwrap().is_empty());
    }

    #[test]
    fn bad_timestamp_names_record() {
        let err = load(
            "departure,distance_km,payout\n\
             2025-07-12 06:00,100,250\n\
             12/07/2025 06:00,100,250\n",
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Row { record: 2, .. }));
    }

    #[test]
    fn negative_values_rejected() {
        let err = load("departure,distance_km,payout\n2025-07-12 06:00,100,-5\n").unwrap_err();
        assert!(matches!(err, TableError::Row { record: 1, .. }));
    }

    #[test]
    fn unparsable_number_is_csv_error() {
        let err = load("departure,distance_km,payout\n2025-07-12 06:00,far,250\n").unwrap_err();
        assert!(matches!(err, TableError::Csv(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.csv");
        std::fs::write(&path, "departure,distance_km,payout\n2025-07-12 06:00,100,250\n").unwrap();

        assert_eq!(load_routes_csv(&path, b',').unwrap().len(), 1);
        assert!(matches!(
            load_routes_csv(&dir.path().join("missing.csv"), b','),
            Err(TableError::Io(_))
        ));
    }
}
