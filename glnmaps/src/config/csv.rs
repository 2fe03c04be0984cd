use anyhow::{Result, ensure};
use glnmaps_geometry::CsvReader;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CsvConfig {
	/// Field separator, a single ASCII character. Default: ","
	pub separator: Option<char>,
}

impl CsvConfig {
	pub fn override_optional_separator(&mut self, separator: &Option<char>) {
		if separator.is_some() {
			self.separator = *separator;
		}
	}

	/// Builds the CSV reader described by this configuration.
	pub fn reader(&self) -> Result<CsvReader> {
		let reader = CsvReader::new();
		let Some(separator) = self.separator else {
			return Ok(reader);
		};
		ensure!(
			separator.is_ascii(),
			"CSV separator must be a single ASCII character, got {separator:?}"
		);
		Ok(reader.with_field_separator(u8::try_from(separator)?))
	}
}
