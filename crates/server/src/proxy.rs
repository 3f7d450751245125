//! Development-mode proxy: unmatched requests are forwarded to the front-end
//! dev server so the page is served with live-reload while this process
//! keeps owning the public port.

use axum::{
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use shared::error::{ApiError, ErrorCode};
use tracing::{debug, warn};
use url::Url;

pub(crate) async fn forward(
    http: &reqwest::Client,
    dev_base: &Url,
    method: Method,
    uri: &Uri,
) -> Response {
    let mut target = dev_base.clone();
    target.set_path(uri.path());
    target.set_query(uri.query());

    let upstream = match http.request(method, target.clone()).send().await {
        Ok(upstream) => upstream,
        Err(error) => {
            warn!(%target, %error, "dev server unreachable");
            return (
                StatusCode::BAD_GATEWAY,
                Json(ApiError::new(
                    ErrorCode::Upstream,
                    format!("dev server unreachable: {error}"),
                )),
            )
                .into_response();
        }
    };

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    match upstream.bytes().await {
        Ok(bytes) => {
            debug!(%target, status = status.as_u16(), "proxied to dev server");
            (status, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(error) => {
            warn!(%target, %error, "dev server body read failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiError::new(
                    ErrorCode::Upstream,
                    format!("dev server body read failed: {error}"),
                )),
            )
                .into_response()
        }
    }
}
