//! HTTP front desk for typcat catalogs (made by FontLab https://www.fontlab.com/)
//!
//! A small axum service that builds a catalog on demand: POST a folder,
//! get back the sorted entries (or just the display names, if you are in
//! a hurry). Scans run on the blocking pool so the async side stays
//! responsive while the filesystem does its thing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task;

use typcat_core::catalog::{FontCatalog, FontCatalogEntry};

/// A request for the catalog of one folder.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogRequest {
    /// Folder to scan
    pub dir: PathBuf,
    /// Extension filter; empty means the default `ttf`/`ttc`
    pub extensions: Vec<String>,
    /// Return display names only, skipping paths
    pub names_only: bool,
}

/// The catalog, in whichever shape was asked for.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Full entries when the caller wants the whole story
    pub entries: Option<Vec<FontCatalogEntry>>,
    /// Display names only when `names_only` was set
    pub names: Option<Vec<String>>,
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding HTTP server to {bind}"))?;

    axum::serve(listener, router())
        .await
        .context("serving HTTP")?;
    Ok(())
}

/// Route table: a health check and the catalog endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/catalog", post(catalog_handler))
}

async fn catalog_handler(
    Json(req): Json<CatalogRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.dir.as_os_str().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "a catalog directory is required".to_string(),
        ));
    }

    let dir = req.dir.clone();
    let extensions = req.extensions.clone();

    let entries = task::spawn_blocking(move || {
        let mut catalog = FontCatalog::new(dir);
        if !extensions.is_empty() {
            catalog = catalog.with_extensions(extensions);
        }
        catalog.build();
        catalog.entries().to_vec()
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("task join error: {e}"),
        )
    })?;

    if req.names_only {
        let names: Vec<String> = entries
            .iter()
            .map(|entry| entry.display_name.clone())
            .collect();
        Ok(Json(CatalogResponse {
            entries: None,
            names: Some(names),
        }))
    } else {
        Ok(Json(CatalogResponse {
            entries: Some(entries),
            names: None,
        }))
    }
}
