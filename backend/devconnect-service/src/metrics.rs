//! Prometheus metrics for devconnect-service.
//!
//! Exposes core collectors and an HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    /// Like toggles processed, by resulting action (like/unlike).
    pub static ref LIKE_TOGGLE_TOTAL: IntCounterVec = register_int_counter_vec!(
        "like_toggle_total",
        "Like toggles processed segmented by resulting action",
        &["action"]
    )
    .expect("failed to register like_toggle_total");

    /// Notification pushes, by outcome (ok/error).
    pub static ref NOTIFICATION_PUSH_TOTAL: IntCounterVec = register_int_counter_vec!(
        "notification_push_total",
        "Notification list pushes segmented by outcome",
        &["result"]
    )
    .expect("failed to register notification_push_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
