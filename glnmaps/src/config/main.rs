use super::{CsvConfig, ServerConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};

/// Top-level configuration, usually read from a YAML file:
///
/// ```yaml
/// server:
///   ip: 127.0.0.1
///   port: 3000
/// template: ./index.html
/// csv:
///   separator: ";"
/// ```
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// HTTP server configuration
	#[serde(default)]
	pub server: ServerConfig,

	/// HTML shell to embed the GeoJSON into. The built-in viewer is used if unset.
	#[serde(default)]
	pub template: Option<PathBuf>,

	/// CSV decoding options
	#[serde(default)]
	pub csv: CsvConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Parse from a file path. A relative `template` path is resolved against the
	/// directory of the configuration file.
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open config file {path:?}"))?;
		let mut config =
			Config::from_reader(BufReader::new(file)).with_context(|| format!("Failed to parse config file {path:?}"))?;

		if let Some(base) = path.parent() {
			config.resolve_paths(base);
		}
		Ok(config)
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		if let Some(template) = &self.template
			&& template.is_relative()
		{
			self.template = Some(base.join(template));
		}
	}

	pub fn override_optional_template(&mut self, template: &Option<PathBuf>) {
		if template.is_some() {
			self.template = template.clone();
		}
	}
}
