//! Router composition for the preview server.
//!
//! Only `GET /` and `GET /download` are served. Every other path and every other
//! method on a known path falls through to 404.

use super::handlers::{not_found, serve_download, serve_index};
use crate::template::MapDocument;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn build_router(document: Arc<MapDocument>) -> Router {
	Router::new()
		.route("/", get(serve_index).fallback(not_found))
		.route("/download", get(serve_download).fallback(not_found))
		.fallback(not_found)
		.with_state(document)
}
