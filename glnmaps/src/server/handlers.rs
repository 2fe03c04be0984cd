//! HTTP handlers and small response helpers for the preview server.
//!
//! - `serve_index` renders the map viewer with the download link.
//! - `serve_download` returns the same document as plain text, without the link.
//! - `not_found` answers everything else.
//!
//! Every response is rendered from the shared, immutable [`MapDocument`].

use crate::template::MapDocument;
use axum::{
	body::Body,
	extract::State,
	http::{StatusCode, header},
	response::Response,
};
use std::sync::Arc;

pub async fn serve_index(State(document): State<Arc<MapDocument>>) -> Response<Body> {
	log::debug!("handle index request");
	ok_with("text/html; charset=utf-8", document.render(true))
}

pub async fn serve_download(State(document): State<Arc<MapDocument>>) -> Response<Body> {
	log::debug!("handle download request");
	ok_with("text/plain; charset=utf-8", document.render(false))
}

pub async fn not_found() -> Response<Body> {
	log::debug!("send 404");
	error_404()
}

// --- small helpers -----------------------------------------------------------

fn ok_with(mime: &'static str, body: String) -> Response<Body> {
	let mut response = Response::new(Body::from(body));
	response
		.headers_mut()
		.insert(header::CONTENT_TYPE, header::HeaderValue::from_static(mime));
	response
}

fn error_with(status: StatusCode, message: &'static str) -> Response<Body> {
	let mut response = Response::new(Body::from(message));
	*response.status_mut() = status;
	response.headers_mut().insert(
		header::CONTENT_TYPE,
		header::HeaderValue::from_static("text/plain; charset=utf-8"),
	);
	response
}

pub fn error_404() -> Response<Body> {
	error_with(StatusCode::NOT_FOUND, "Not Found")
}
