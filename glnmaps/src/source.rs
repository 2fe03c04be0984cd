//! Decides where the GeoJSON comes from and produces it.
//!
//! - Piped standard input is taken verbatim as GeoJSON text.
//! - A `.geojson` file is read verbatim.
//! - A `.csv` file is decoded and converted into a FeatureCollection.
//!
//! Neither the piped text nor a `.geojson` file is checked for being valid JSON.

use anyhow::{Context, Result};
use glnmaps_geometry::{CsvReader, GeoCollection};
use std::{
	fs::{self, File},
	io::{BufRead, BufReader},
	path::{Path, PathBuf},
};
use thiserror::Error;

/// Why the command-line input was rejected. Each variant is fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
	#[error("No input file given. Usage: glnmaps <FILE.csv|FILE.geojson>, or pipe GeoJSON into glnmaps.")]
	MissingPath,

	#[error("Unsupported file type: {0:?}. Only .csv and .geojson files can be read.")]
	UnsupportedFileType(PathBuf),

	#[error("File does not exist: {0:?}")]
	FileNotFound(PathBuf),
}

impl InputError {
	/// Process exit code reported for this error.
	pub fn exit_code(&self) -> u8 {
		match self {
			InputError::MissingPath | InputError::UnsupportedFileType(_) | InputError::FileNotFound(_) => 1,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
	/// GeoJSON text piped through standard input.
	Stdin,
	Csv(PathBuf),
	GeoJson(PathBuf),
}

/// Picks the input source.
///
/// A non-interactive stdin always wins, even if a path was passed as well.
/// Otherwise the path must be given, end in `.csv` or `.geojson`, and name an
/// existing regular file, checked in that order.
pub fn resolve_source(stdin_is_terminal: bool, path: Option<&Path>) -> Result<InputSource, InputError> {
	if !stdin_is_terminal {
		return Ok(InputSource::Stdin);
	}

	let path = path.ok_or(InputError::MissingPath)?;
	let name = path.to_string_lossy();

	let source = if name.ends_with(".csv") {
		InputSource::Csv(path.to_path_buf())
	} else if name.ends_with(".geojson") {
		InputSource::GeoJson(path.to_path_buf())
	} else {
		return Err(InputError::UnsupportedFileType(path.to_path_buf()));
	};

	// `is_file` reports probe failures such as missing permissions as `false`.
	if !path.is_file() {
		return Err(InputError::FileNotFound(path.to_path_buf()));
	}

	Ok(source)
}

impl InputSource {
	/// Produces the GeoJSON document text for this source.
	pub fn read_geojson(&self, stdin: impl BufRead, csv_reader: &CsvReader) -> Result<String> {
		match self {
			InputSource::Stdin => read_piped_geojson(stdin),
			InputSource::Csv(path) => convert_csv_file(path, csv_reader),
			InputSource::GeoJson(path) => read_geojson_file(path),
		}
	}
}

/// Joins all lines of `reader` without any separator.
pub fn read_piped_geojson(reader: impl BufRead) -> Result<String> {
	reader
		.lines()
		.collect::<Result<String, _>>()
		.context("Failed to read GeoJSON from standard input")
}

pub fn read_geojson_file(path: &Path) -> Result<String> {
	log::info!("read geojson file {path:?}");
	fs::read_to_string(path).with_context(|| format!("Failed to read GeoJSON file {path:?}"))
}

pub fn convert_csv_file(path: &Path, csv_reader: &CsvReader) -> Result<String> {
	log::info!("convert csv file {path:?}");
	let file = File::open(path).with_context(|| format!("Failed to open CSV file {path:?}"))?;
	let rows = csv_reader
		.read_rows(BufReader::new(file))
		.with_context(|| format!("Failed to read CSV file {path:?}"))?;
	GeoCollection::from_rows(rows).to_json_string()
}
