use std::{
	collections::{BTreeMap, HashMap},
	fmt::Debug,
	slice,
};

/// Read access to a string-keyed mapping of column names to raw values.
///
/// Geo-field inference only needs lookups by exact column name, so it is written
/// against this trait rather than a concrete row type.
pub trait FieldSource {
	fn field(&self, key: &str) -> Option<&str>;
}

/// One decoded data line: column names in header order, paired with their raw values.
///
/// Duplicate column names are kept as they are. A lookup by name sees the last of them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Row {
	fields: Vec<(String, String)>,
}

impl Row {
	pub fn get(&self, key: &str) -> Option<&str> {
		self.fields.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	pub fn iter(&self) -> slice::Iter<'_, (String, String)> {
		self.fields.iter()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(k, _)| k.as_str())
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl FieldSource for Row {
	fn field(&self, key: &str) -> Option<&str> {
		self.get(key)
	}
}

impl FieldSource for HashMap<String, String> {
	fn field(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl FieldSource for BTreeMap<String, String> {
	fn field(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl FromIterator<(String, String)> for Row {
	fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
		Row {
			fields: iter.into_iter().collect(),
		}
	}
}

impl From<Vec<(&str, &str)>> for Row {
	fn from(value: Vec<(&str, &str)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
	}
}

impl<'a> IntoIterator for &'a Row {
	type Item = &'a (String, String);
	type IntoIter = slice::Iter<'a, (String, String)>;
	fn into_iter(self) -> Self::IntoIter {
		self.fields.iter()
	}
}

impl Debug for Row {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.fields.iter().map(|(k, v)| (k, v))).finish()
	}
}
