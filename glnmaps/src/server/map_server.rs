//! Preview server lifecycle.
//!
//! `handlers` renders responses and `routes` composes them into an axum `Router`.
//! This module only owns binding the socket, spawning the serving task and shutting
//! it down again.

use super::routes;
use crate::{config::ServerConfig, template::MapDocument};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::oneshot};

/// Serves one immutable [`MapDocument`] over HTTP.
///
/// ```no_run
/// # use glnmaps::{config::ServerConfig, server::MapServer, template::MapDocument};
/// # async fn demo() -> anyhow::Result<()> {
/// let document = MapDocument::new("<html>{{geojson}}</html>", "{}");
/// let mut server = MapServer::from_config(&ServerConfig::default(), document);
/// server.start().await?;
/// // ... run requests ...
/// server.stop().await;
/// # Ok(())
/// # }
/// ```
pub struct MapServer {
	ip: String,
	port: u16,
	document: Arc<MapDocument>,
	/// One-shot channel to signal graceful shutdown to the serving task.
	exit_signal: Option<oneshot::Sender<()>>,
	/// Join handle for the serving task; awaited in `stop()`.
	join: Option<tokio::task::JoinHandle<()>>,
	local_addr: Option<SocketAddr>,
}

impl MapServer {
	pub fn from_config(config: &ServerConfig, document: MapDocument) -> MapServer {
		MapServer {
			ip: config.ip().to_string(),
			port: config.port(),
			document: Arc::new(document),
			exit_signal: None,
			join: None,
			local_addr: None,
		}
	}

	/// Binds the socket and starts serving in a background task.
	///
	/// If the server is already running it is stopped first.
	pub async fn start(&mut self) -> Result<()> {
		if self.exit_signal.is_some() || self.join.is_some() {
			self.stop().await;
		}

		log::info!("starting server");

		let router = routes::build_router(Arc::clone(&self.document));

		let addr = format!("{}:{}", self.ip, self.port);
		log::info!("server binding on {addr}");

		let listener = TcpListener::bind(&addr)
			.await
			.with_context(|| format!("Failed to bind server to {addr}"))?;
		self.local_addr = Some(listener.local_addr()?);

		let (tx, rx) = oneshot::channel::<()>();

		let handle = tokio::spawn(async move {
			if let Err(err) = axum::serve(listener, router.into_make_service())
				.with_graceful_shutdown(async {
					rx.await.ok();
				})
				.await
			{
				log::error!("server task exited with error: {err}");
			}
		});

		self.exit_signal = Some(tx);
		self.join = Some(handle);

		Ok(())
	}

	/// Triggers graceful shutdown and waits for the serving task to finish.
	///
	/// Does nothing if the server is not running.
	pub async fn stop(&mut self) {
		if self.exit_signal.is_none() && self.join.is_none() {
			return;
		}

		log::info!("stopping server");

		if let Some(tx) = self.exit_signal.take() {
			let _ = tx.send(());
		}

		if let Some(handle) = self.join.take() {
			match tokio::time::timeout(Duration::from_secs(10), handle).await {
				Ok(Err(join_err)) => log::warn!("server task join error: {join_err}"),
				Ok(Ok(())) => {}
				Err(_) => log::warn!("server task did not shutdown within timeout; continuing"),
			}
		}

		self.local_addr = None;
	}

	/// The address actually bound, once started. Useful when the configured port is 0.
	pub fn local_addr(&self) -> Option<SocketAddr> {
		self.local_addr
	}

	/// The URL printed for the user, with loopback addresses shown as `localhost`.
	pub fn url(&self) -> Option<String> {
		self.local_addr.map(|addr| {
			if addr.ip().is_loopback() {
				format!("http://localhost:{}/", addr.port())
			} else {
				format!("http://{addr}/")
			}
		})
	}
}
