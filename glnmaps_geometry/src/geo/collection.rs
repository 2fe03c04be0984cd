use super::GeoFeature;
use crate::{Row, infer_geo_fields};
use anyhow::{Context, Result};
use serde::Serialize;

/// A GeoJSON `FeatureCollection`, features in input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

/// Counters collected while folding rows into a collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionStats {
	/// Rows turned into features.
	pub rows: usize,
	/// Rows that failed to decode and were left out.
	pub skipped: usize,
	/// Features whose latitude or longitude could not be resolved.
	pub without_coordinates: usize,
}

impl GeoCollection {
	pub fn new(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	/// Folds decoded rows into a collection, one feature per row.
	///
	/// Rows that failed to decode are logged and skipped.
	pub fn from_rows<I>(rows: I) -> Self
	where
		I: IntoIterator<Item = Result<Row>>,
	{
		let mut builder = CollectionBuilder::new();
		for row in rows {
			builder.push(row);
		}
		let (collection, stats) = builder.finish();

		log::info!(
			"converted {} row(s) into features, skipped {}",
			stats.rows,
			stats.skipped
		);
		if stats.without_coordinates > 0 {
			log::warn!(
				"{} feature(s) have no usable latitude/longitude",
				stats.without_coordinates
			);
		}

		collection
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Compact GeoJSON text. Equal collections always produce identical strings.
	pub fn to_json_string(&self) -> Result<String> {
		serde_json::to_string(self).context("Failed to serialize GeoJSON")
	}
}

/// Incrementally builds a [`GeoCollection`] while keeping [`ConversionStats`].
#[derive(Debug, Default)]
pub struct CollectionBuilder {
	collection: GeoCollection,
	stats: ConversionStats,
}

impl CollectionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, row: Result<Row>) {
		match row {
			Ok(row) => {
				let fields = infer_geo_fields(&row);
				if !fields.has_coordinates() {
					self.stats.without_coordinates += 1;
				}
				self.collection.features.push(GeoFeature::from_fields(&row, fields));
				self.stats.rows += 1;
			}
			Err(err) => {
				log::warn!("skipping row: {err:#}");
				self.stats.skipped += 1;
			}
		}
	}

	pub fn finish(self) -> (GeoCollection, ConversionStats) {
		(self.collection, self.stats)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CsvReader;
	use anyhow::anyhow;
	use pretty_assertions::assert_eq;

	fn from_csv(csv: &str) -> GeoCollection {
		GeoCollection::from_rows(CsvReader::new().read_rows(csv.as_bytes()).unwrap())
	}

	#[test]
	fn one_feature_per_row() {
		let collection = from_csv("name,lat,lng\na,1,2\nb,3,4\nc,5,6\n");
		assert_eq!(collection.len(), 3);
		let titles: Vec<_> = collection
			.features
			.iter()
			.map(|f| f.properties.title.clone().unwrap())
			.collect();
		assert_eq!(titles, ["a", "b", "c"]);
	}

	#[test]
	fn rows_without_coordinates_are_kept() {
		let collection = from_csv("name,x\na,1\nb,2\n");
		assert_eq!(collection.len(), 2);
		assert!(collection.features.iter().all(|f| f.coordinates()[0].is_nan()));
	}

	#[test]
	fn empty_input_gives_empty_collection() {
		let collection = from_csv("");
		assert!(collection.is_empty());
		assert_eq!(collection.to_json_string().unwrap(), r#"{"type":"FeatureCollection","features":[]}"#);
	}

	#[test]
	fn builder_counts() {
		let mut builder = CollectionBuilder::new();
		builder.push(Ok(Row::from(vec![("lat", "1"), ("lng", "2")])));
		builder.push(Err(anyhow!("broken line")));
		builder.push(Ok(Row::from(vec![("lat", "1")])));
		let (collection, stats) = builder.finish();

		assert_eq!(collection.len(), 2);
		assert_eq!(
			stats,
			ConversionStats {
				rows: 2,
				skipped: 1,
				without_coordinates: 1,
			}
		);
	}

	#[test]
	fn ragged_rows_do_not_stop_conversion() {
		let collection = from_csv("name,lat,lng\na,1,2\nbroken\nc,5,6\n");
		assert_eq!(collection.len(), 2);
		assert_eq!(collection.features[1].properties.title.as_deref(), Some("c"));
	}

	#[test]
	fn serialization_is_stable() {
		let collection = from_csv("名称,緯度,経度,備考\n東京駅,35.681,139.767,\"丸の内, 東京\"\n");
		let first = collection.to_json_string().unwrap();
		let second = collection.to_json_string().unwrap();
		assert_eq!(first, second);
		assert_eq!(
			first,
			r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[139.767,35.681]},"properties":{"title":"東京駅","description":"名称: 東京駅<br>緯度: 35.681<br>経度: 139.767<br>備考: 丸の内, 東京<br>"}}]}"#
		);
	}
}
