//! Production asset pipeline: path sanitization, content-type mapping, and
//! the SPA catch-all that answers unmatched paths with the entry document.

use std::path::{Component, Path, PathBuf};

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use shared::error::{ApiError, ErrorCode};
use tracing::debug;

pub(crate) const INDEX_FILE: &str = "index.html";

/// Maps a request path onto a relative filesystem path under the static
/// root. Rejects traversal, absolute components, and any dot-prefixed
/// segment (the asset tree never serves hidden files). `/` maps to the
/// entry document.
pub(crate) fn sanitize_request_path(request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Some(PathBuf::from(INDEX_FILE));
    }
    // Encoded characters never occur in this asset tree; refusing them
    // outright closes the encoded-traversal hole.
    if trimmed.contains('%') {
        return None;
    }
    let candidate = Path::new(trimmed);
    let mut sanitized = PathBuf::new();
    for component in candidate.components() {
        match component {
            Component::Normal(segment) => {
                let segment = segment.to_str()?;
                if segment.starts_with('.') {
                    return None;
                }
                sanitized.push(segment);
            }
            _ => return None,
        }
    }
    Some(sanitized)
}

pub(crate) fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Serves `request_path` from the static root. Misses fall back to the
/// entry document so the single-page app answers unmatched paths; a missing
/// entry document is the one hard 404.
pub(crate) async fn serve(static_dir: &Path, request_path: &str) -> Response {
    let Some(relative) = sanitize_request_path(request_path) else {
        debug!(path = request_path, "refused asset path");
        return not_found();
    };

    let file_path = static_dir.join(&relative);
    match tokio::fs::read(&file_path).await {
        Ok(bytes) => file_response(&relative, bytes),
        Err(_) if relative != Path::new(INDEX_FILE) => {
            let index_path = static_dir.join(INDEX_FILE);
            match tokio::fs::read(&index_path).await {
                Ok(bytes) => file_response(Path::new(INDEX_FILE), bytes),
                Err(_) => not_found(),
            }
        }
        Err(_) => not_found(),
    }
}

fn file_response(relative: &Path, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type_for(relative))],
        bytes,
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(ErrorCode::NotFound, "asset not found")),
    )
        .into_response()
}

#[cfg(test)]
#[path = "tests/assets_tests.rs"]
mod tests;
