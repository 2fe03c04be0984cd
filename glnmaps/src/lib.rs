//! glnmaps turns a CSV table or a GeoJSON document into an interactive map and
//! serves it on a local HTTP server.
//!
//! - [`source`] decides where the GeoJSON comes from (stdin, `.csv`, `.geojson`)
//! - [`template`] embeds the GeoJSON into the HTML viewer
//! - [`server`] serves the rendered document
//! - [`config`] holds the optional YAML configuration
//!
//! CSV decoding and GeoJSON construction live in `glnmaps_geometry`.

pub mod config;
pub mod server;
pub mod source;
pub mod template;
