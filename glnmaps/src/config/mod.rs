//! glnmaps configuration.
//!
//! - [`Config`](crate::config::Config): top-level loader and YAML parser
//! - [`ServerConfig`](crate::config::ServerConfig): address the preview server binds to
//! - [`CsvConfig`](crate::config::CsvConfig): options for decoding CSV input
//!
//! Every field is optional. Command-line flags override values from the file,
//! and anything left unset falls back to a built-in default.

mod csv;
mod main;
mod server;

pub use csv::CsvConfig;
pub use main::Config;
pub use server::ServerConfig;
