use crate::{GeoFields, Row, infer_geo_fields};
use serde::Serialize;

/// Separator appended after every `key: value` pair of a feature description.
pub const DESCRIPTION_LINE_BREAK: &str = "<br>";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
	/// `[longitude, latitude]`, in GeoJSON order.
	Point { coordinates: [f64; 2] },
}

impl Geometry {
	pub fn point(longitude: f64, latitude: f64) -> Self {
		Geometry::Point {
			coordinates: [longitude, latitude],
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FeatureProperties {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub description: String,
}

/// A GeoJSON `Feature` with a point geometry.
///
/// Serializes as `{"type":"Feature","geometry":{...},"properties":{...}}`. Non-finite
/// coordinates are written as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct GeoFeature {
	pub geometry: Geometry,
	pub properties: FeatureProperties,
}

impl GeoFeature {
	pub fn from_row(row: &Row) -> Self {
		Self::from_fields(row, infer_geo_fields(row))
	}

	/// Builds the feature from already inferred fields. The coordinates are taken
	/// as they are, `NaN` included.
	pub fn from_fields(row: &Row, fields: GeoFields) -> Self {
		GeoFeature {
			geometry: Geometry::point(fields.longitude, fields.latitude),
			properties: FeatureProperties {
				title: fields.name,
				description: describe_row(row),
			},
		}
	}

	pub fn coordinates(&self) -> [f64; 2] {
		match self.geometry {
			Geometry::Point { coordinates } => coordinates,
		}
	}
}

/// Every column of the row as `key: value<br>`, in header order.
pub fn describe_row(row: &Row) -> String {
	row.iter()
		.map(|(key, value)| format!("{key}: {value}{DESCRIPTION_LINE_BREAK}"))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn builds_point_from_native_columns() {
		let row = Row::from(vec![("名称", "A"), ("緯度", "35.0"), ("経度", "139.0")]);
		let feature = GeoFeature::from_row(&row);
		assert_eq!(feature.coordinates(), [139.0, 35.0]);
		assert_eq!(feature.properties.title.as_deref(), Some("A"));
	}

	#[test]
	fn builds_point_from_english_columns() {
		let row = Row::from(vec![("name", "B"), ("lat", "10"), ("lng", "20")]);
		let feature = GeoFeature::from_row(&row);
		assert_eq!(feature.coordinates(), [20.0, 10.0]);
		assert_eq!(feature.properties.title.as_deref(), Some("B"));
	}

	#[test]
	fn description_covers_all_columns_in_order() {
		let row = Row::from(vec![("A", "1"), ("B", "2")]);
		assert_eq!(describe_row(&row), "A: 1<br>B: 2<br>");

		let row = Row::from(vec![("lat", "1"), ("note", "x"), ("lng", "2")]);
		let feature = GeoFeature::from_row(&row);
		assert_eq!(feature.properties.description, "lat: 1<br>note: x<br>lng: 2<br>");
	}

	#[test]
	fn serializes_as_geojson() {
		let row = Row::from(vec![("name", "B"), ("lat", "10.5"), ("lng", "20")]);
		let json = serde_json::to_string(&GeoFeature::from_row(&row)).unwrap();
		assert_eq!(
			json,
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[20.0,10.5]},"properties":{"title":"B","description":"name: B<br>lat: 10.5<br>lng: 20<br>"}}"#
		);
	}

	#[test]
	fn missing_values_serialize_as_null_and_no_title() {
		let row = Row::from(vec![("x", "1")]);
		let json = serde_json::to_string(&GeoFeature::from_row(&row)).unwrap();
		assert_eq!(
			json,
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[null,null]},"properties":{"description":"x: 1<br>"}}"#
		);
	}

	#[test]
	fn from_fields_uses_values_verbatim() {
		let row = Row::from(vec![("id", "7")]);
		let fields = GeoFields {
			latitude: f64::NAN,
			longitude: 5.0,
			name: Some("n".into()),
		};
		let feature = GeoFeature::from_fields(&row, fields);
		let [lng, lat] = feature.coordinates();
		assert_eq!(lng, 5.0);
		assert!(lat.is_nan());
		assert_eq!(feature.properties.description, "id: 7<br>");
	}
}
