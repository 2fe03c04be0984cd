//! # glnmaps_geometry
//!
//! The conversion engine behind `glnmaps`: it decodes delimited text into [`Row`]s,
//! infers which columns hold latitude, longitude and a display name, and folds the
//! rows into a GeoJSON [`GeoCollection`].
//!
//! ## Usage Example
//!
//! ```rust
//! use glnmaps_geometry::{CsvReader, GeoCollection};
//!
//! let csv = "名称,緯度,経度\n東京駅,35.681,139.767\n";
//! let rows = CsvReader::new().read_rows(csv.as_bytes()).unwrap();
//! let collection = GeoCollection::from_rows(rows);
//!
//! assert_eq!(collection.len(), 1);
//! assert!(collection.to_json_string().unwrap().starts_with(r#"{"type":"FeatureCollection""#));
//! ```

mod csv_reader;
pub mod geo;
mod inference;
mod row;

pub use csv_reader::*;
pub use geo::*;
pub use inference::*;
pub use row::*;
