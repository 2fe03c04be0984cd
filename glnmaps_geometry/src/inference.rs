//! Geo-field inference.
//!
//! Source files name their columns in different languages and conventions. Each
//! logical field (latitude, longitude, display name) is described by a [`FieldRule`]:
//! an ordered list of candidate column names. The first candidate that is present
//! with a non-empty value wins.

use crate::FieldSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoRole {
	Latitude,
	Longitude,
	Name,
}

/// Candidate column names for one logical field, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
	pub role: GeoRole,
	pub candidates: &'static [&'static str],
}

pub const LATITUDE_RULE: FieldRule = FieldRule {
	role: GeoRole::Latitude,
	candidates: &["緯度", "緯度（10進法）", "lat", "latitude"],
};

pub const LONGITUDE_RULE: FieldRule = FieldRule {
	role: GeoRole::Longitude,
	candidates: &["経度", "経度（10進法）", "lng", "longitude", "lon", "long"],
};

pub const NAME_RULE: FieldRule = FieldRule {
	role: GeoRole::Name,
	candidates: &["名称", "name"],
};

pub const GEO_FIELD_RULES: [FieldRule; 3] = [LATITUDE_RULE, LONGITUDE_RULE, NAME_RULE];

impl FieldRule {
	/// Returns the name of the first candidate column with a non-empty value.
	pub fn resolve_key<S: FieldSource + ?Sized>(&self, source: &S) -> Option<&'static str> {
		self
			.candidates
			.iter()
			.copied()
			.find(|key| source.field(key).is_some_and(|value| !value.is_empty()))
	}

	/// Returns the value of the first candidate column with a non-empty value.
	pub fn resolve<'a, S: FieldSource + ?Sized>(&self, source: &'a S) -> Option<&'a str> {
		self
			.candidates
			.iter()
			.find_map(|key| source.field(key).filter(|value| !value.is_empty()))
	}
}

/// The logical fields of one row after inference.
///
/// Missing or non-numeric coordinates are `NaN`; a missing name is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFields {
	pub latitude: f64,
	pub longitude: f64,
	pub name: Option<String>,
}

impl GeoFields {
	pub fn has_coordinates(&self) -> bool {
		self.latitude.is_finite() && self.longitude.is_finite()
	}
}

pub fn infer_geo_fields<S: FieldSource + ?Sized>(source: &S) -> GeoFields {
	GeoFields {
		latitude: parse_coordinate(LATITUDE_RULE.resolve(source)),
		longitude: parse_coordinate(LONGITUDE_RULE.resolve(source)),
		name: NAME_RULE.resolve(source).map(str::to_string),
	}
}

fn parse_coordinate(value: Option<&str>) -> f64 {
	value.and_then(|v| v.trim().parse::<f64>().ok()).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Row;
	use rstest::rstest;
	use std::collections::HashMap;

	#[test]
	fn native_language_columns() {
		let row = Row::from(vec![("名称", "A"), ("緯度", "35.0"), ("経度", "139.0")]);
		let fields = infer_geo_fields(&row);
		assert_eq!(fields.latitude, 35.0);
		assert_eq!(fields.longitude, 139.0);
		assert_eq!(fields.name.as_deref(), Some("A"));
		assert!(fields.has_coordinates());
	}

	#[test]
	fn english_columns() {
		let row = Row::from(vec![("name", "B"), ("lat", "10"), ("lng", "20")]);
		let fields = infer_geo_fields(&row);
		assert_eq!(fields.latitude, 10.0);
		assert_eq!(fields.longitude, 20.0);
		assert_eq!(fields.name.as_deref(), Some("B"));
	}

	#[test]
	fn nothing_recognizable() {
		let row = Row::from(vec![("x", "1"), ("y", "2")]);
		let fields = infer_geo_fields(&row);
		assert!(fields.latitude.is_nan());
		assert!(fields.longitude.is_nan());
		assert_eq!(fields.name, None);
		assert!(!fields.has_coordinates());
	}

	#[rstest]
	#[case(vec![("緯度", "1"), ("緯度（10進法）", "2"), ("lat", "3"), ("latitude", "4")], "緯度")]
	#[case(vec![("緯度（10進法）", "2"), ("lat", "3"), ("latitude", "4")], "緯度（10進法）")]
	#[case(vec![("latitude", "4"), ("lat", "3")], "lat")]
	#[case(vec![("latitude", "4")], "latitude")]
	#[case(vec![("緯度", ""), ("lat", "3")], "lat")]
	fn latitude_priority(#[case] fields: Vec<(&str, &str)>, #[case] expected: &str) {
		assert_eq!(LATITUDE_RULE.resolve_key(&Row::from(fields)), Some(expected));
	}

	#[rstest]
	#[case(vec![("経度", "1"), ("lng", "3")], "経度")]
	#[case(vec![("経度（10進法）", "2"), ("lng", "3")], "経度（10進法）")]
	#[case(vec![("long", "6"), ("lng", "3")], "lng")]
	#[case(vec![("long", "6"), ("longitude", "4")], "longitude")]
	#[case(vec![("long", "6"), ("lon", "5")], "lon")]
	#[case(vec![("long", "6")], "long")]
	fn longitude_priority(#[case] fields: Vec<(&str, &str)>, #[case] expected: &str) {
		assert_eq!(LONGITUDE_RULE.resolve_key(&Row::from(fields)), Some(expected));
	}

	#[rstest]
	#[case(vec![("名称", "甲"), ("name", "b")], Some("甲"))]
	#[case(vec![("name", "b")], Some("b"))]
	#[case(vec![("名称", ""), ("name", "b")], Some("b"))]
	#[case(vec![("名称", "")], None)]
	#[case(vec![("title", "t")], None)]
	fn name_resolution(#[case] fields: Vec<(&str, &str)>, #[case] expected: Option<&str>) {
		assert_eq!(NAME_RULE.resolve(&Row::from(fields)), expected);
	}

	#[rstest]
	#[case("35.5", 35.5)]
	#[case(" 35.5 ", 35.5)]
	#[case("-0.25", -0.25)]
	#[case("1e2", 100.0)]
	fn numeric_values(#[case] raw: &str, #[case] expected: f64) {
		let row = Row::from(vec![("lat", raw)]);
		assert_eq!(infer_geo_fields(&row).latitude, expected);
	}

	#[rstest]
	#[case("north")]
	#[case("35,5")]
	#[case("")]
	#[case("  ")]
	fn non_numeric_values_become_nan(#[case] raw: &str) {
		let row = Row::from(vec![("lat", raw), ("lng", "1")]);
		let fields = infer_geo_fields(&row);
		assert!(fields.latitude.is_nan());
		assert_eq!(fields.longitude, 1.0);
	}

	#[test]
	fn works_on_plain_maps() {
		let map: HashMap<String, String> = [("lat", "1"), ("lon", "2")]
			.into_iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		let fields = infer_geo_fields(&map);
		assert_eq!((fields.latitude, fields.longitude), (1.0, 2.0));
	}

	#[test]
	fn rule_table_is_ordered_by_role() {
		let roles: Vec<GeoRole> = GEO_FIELD_RULES.iter().map(|r| r.role).collect();
		assert_eq!(roles, [GeoRole::Latitude, GeoRole::Longitude, GeoRole::Name]);
	}
}
