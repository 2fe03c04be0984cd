//! CSV reader producing [`Row`]s.
//!
//! The first line is the header and defines the column names. Every following line
//! becomes one [`Row`], in file order. Decoding is lazy and forward-only.
//!
//! A ragged line (field count differs from the header) or a line that is not valid
//! UTF-8 is reported as an `Err` for that line only; the iterator keeps going with the
//! next line, so one bad row never stops the rest of the file from being read.
//!
//! # Example
//!
//! ```rust
//! use glnmaps_geometry::CsvReader;
//!
//! let data = "name;lat;lng\nBerlin;52.52;13.40\n";
//! let rows: Vec<_> = CsvReader::new()
//! 	.with_field_separator(b';')
//! 	.read_rows(data.as_bytes())
//! 	.unwrap()
//! 	.collect::<Result<_, _>>()
//! 	.unwrap();
//!
//! assert_eq!(rows[0].get("name"), Some("Berlin"));
//! ```

use crate::Row;
use anyhow::{Context, Result, bail};
use csv::{ByteRecord, ReaderBuilder};
use std::io::Read;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A configurable reader for delimited text.
#[derive(Clone, Debug)]
pub struct CsvReader {
	/// Field separator byte. Defaults to `b','`.
	pub field_separator: u8,
}

impl Default for CsvReader {
	fn default() -> Self {
		Self::new()
	}
}

impl CsvReader {
	#[must_use]
	pub fn new() -> Self {
		Self { field_separator: b',' }
	}

	/// Sets a custom field separator, e.g. `b';'` or `b'\t'`.
	#[must_use]
	pub fn with_field_separator(mut self, separator: u8) -> Self {
		self.field_separator = separator;
		self
	}

	/// Reads the header and returns an iterator over the remaining lines.
	///
	/// Fails only if the header itself cannot be read. Input without any line yields an
	/// empty iterator.
	pub fn read_rows<'a>(&self, reader: impl Read + 'a) -> Result<impl Iterator<Item = Result<Row>> + 'a> {
		let mut records = ReaderBuilder::new()
			.delimiter(self.field_separator)
			.has_headers(false)
			.flexible(true)
			.from_reader(reader)
			.into_byte_records();

		let header = match records.next() {
			Some(record) => parse_header(&record.context("Failed to read CSV header")?)?,
			None => Vec::new(),
		};
		log::debug!("csv header: {header:?}");

		Ok(records.map(move |record| {
			let record = record.context("Failed to read CSV line")?;
			build_row(&header, &record)
		}))
	}
}

fn parse_header(record: &ByteRecord) -> Result<Vec<String>> {
	record
		.iter()
		.enumerate()
		.map(|(col, bytes)| {
			let bytes = if col == 0 {
				bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
			} else {
				bytes
			};
			decode_field(bytes).with_context(|| format!("CSV header column {} is not valid UTF-8", col + 1))
		})
		.collect()
}

fn build_row(header: &[String], record: &ByteRecord) -> Result<Row> {
	let line = record.position().map_or(0, csv::Position::line);

	if record.len() != header.len() {
		bail!(
			"line {line} has {} field(s), but the header has {}",
			record.len(),
			header.len()
		);
	}

	header
		.iter()
		.zip(record.iter())
		.map(|(key, bytes)| -> Result<(String, String)> {
			let value = decode_field(bytes).with_context(|| format!("line {line}: field {key:?} is not valid UTF-8"))?;
			Ok((key.clone(), value))
		})
		.collect()
}

fn decode_field(bytes: &[u8]) -> Result<String> {
	Ok(std::str::from_utf8(bytes)?.to_string())
}
