use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use tracing::Instrument;

use crate::shared::format::format_number;

/// Middleware that logs every HTTP request
///
/// Prints to the console:
/// - timestamp (UTC)
/// - duration (ms)
/// - response size, when the body length is known
/// - status code
/// - method and path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = uuid::Uuid::new_v4();

    let span = tracing::info_span!("request", id = %request_id);
    let response = next.run(req).instrument(span.clone()).await;

    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .map(format_number)
        .unwrap_or_else(|| "-".to_string());
    let duration = start.elapsed();
    let status = response.status().as_u16();

    // cyan for success, yellow for everything else
    let color_code = if response.status().is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Utc::now().format("%H:%M:%S"),
        duration.as_millis(),
        size,
        status,
        method,
        uri.path()
    );
    span.in_scope(|| tracing::debug!(%method, path = uri.path(), status, "request finished"));

    response
}
