//! HTML document templating.
//!
//! The HTML shell carries two placeholders: [`GEOJSON_PLACEHOLDER`] and
//! [`DOWNLOAD_PLACEHOLDER`]. Rendering is plain string substitution.
//!
//! The GeoJSON text is inserted as it is, without any escaping. The shell embeds it
//! in a `<script type="application/geo+json">` block. This is only safe because the
//! GeoJSON comes from the operator running the tool; never render untrusted input.

use anyhow::{Context, Result};
use std::path::Path;

pub const GEOJSON_PLACEHOLDER: &str = "{{geojson}}";
pub const DOWNLOAD_PLACEHOLDER: &str = "{{download}}";

/// Markup inserted for [`DOWNLOAD_PLACEHOLDER`] on the HTML route.
pub const DOWNLOAD_LINK: &str = r#"<a id="download" href="/download" download="index.html">Download</a>"#;

/// The built-in map viewer.
pub const DEFAULT_SHELL: &str = include_str!("../assets/index.html");

/// Substitutes the first occurrence of each placeholder in `shell`. Later
/// occurrences are left as they are.
///
/// The download placeholder is replaced first, so placeholder-like text inside the
/// GeoJSON stays untouched.
pub fn render(shell: &str, geojson: &str, include_download: bool) -> String {
	let download = if include_download { DOWNLOAD_LINK } else { "" };
	shell
		.replacen(DOWNLOAD_PLACEHOLDER, download, 1)
		.replacen(GEOJSON_PLACEHOLDER, geojson, 1)
}

/// The HTML shell and the GeoJSON it presents. Built once at startup and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapDocument {
	shell: String,
	geojson: String,
}

impl MapDocument {
	pub fn new(shell: impl Into<String>, geojson: impl Into<String>) -> Self {
		Self {
			shell: shell.into(),
			geojson: geojson.into(),
		}
	}

	/// Uses the shell at `template`, or [`DEFAULT_SHELL`] if `None`.
	pub fn from_template(template: Option<&Path>, geojson: String) -> Result<Self> {
		let shell = match template {
			Some(path) => {
				log::info!("read html template {path:?}");
				std::fs::read_to_string(path).with_context(|| format!("Failed to read HTML template {path:?}"))?
			}
			None => DEFAULT_SHELL.to_string(),
		};

		if !shell.contains(GEOJSON_PLACEHOLDER) {
			log::warn!("the HTML template has no {GEOJSON_PLACEHOLDER} placeholder");
		}

		Ok(Self::new(shell, geojson))
	}

	pub fn render(&self, include_download: bool) -> String {
		render(&self.shell, &self.geojson, include_download)
	}

	pub fn geojson(&self) -> &str {
		&self.geojson
	}
}
