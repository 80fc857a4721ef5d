//! REST API endpoints for streamprobe
//!
//! All endpoints are under /api/v1/ and return JSON.

use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use streamprobe_core::simulate::{self, DeviceClass};
use streamprobe_core::{ProbeReport, Reachability};

/// Cap on the per-request frame-count override
pub const MAX_TOTAL_FRAMES: u32 = 300;

/// Probe request query parameters
#[derive(Deserialize)]
pub struct ProbeQuery {
    /// Page or media URL to probe
    pub url: Option<String>,
    /// Declared client-device class (desktop, mobile, smart_tv)
    pub device: Option<String>,
    /// Optional override of the frame-read attempt count
    pub frames: Option<u32>,
}

/// Probe report response
#[derive(Serialize)]
pub struct ProbeResponse {
    pub status: Reachability,
    /// Average frame latency in seconds, 3 decimal places; null when Offline
    pub latency: Option<f64>,
    /// Dropped-frame count; null when Offline
    pub frame_drops: Option<u32>,
    /// Simulated adaptive bitrate in kbps
    pub bitrate: u32,
    /// Simulated error-pattern label
    pub error_pattern: String,
    /// Simulated device display name
    pub device: String,
    /// When the probe ran, RFC 3339
    pub probed_at: String,
}

/// Client-input fault response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/v1/probe
///
/// Resolves the URL if it points at a hosting-provider page, runs one
/// synchronous probe on the blocking pool, and merges the simulated
/// bitrate/error fields into the report.
pub async fn probe_stream(
    State(state): State<AppState>,
    Query(query): Query<ProbeQuery>,
) -> Result<Json<ProbeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let url = match query.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing URL".to_string(),
                }),
            ));
        }
    };

    let device = query
        .device
        .as_deref()
        .map(DeviceClass::from_param)
        .unwrap_or_default();
    let frames = query.frames.map(|f| f.min(MAX_TOTAL_FRAMES));

    let engine = Arc::clone(&state.engine);
    let resolver = Arc::clone(&state.resolver);
    let report = tokio::task::spawn_blocking(move || {
        // Resolution failure means the core is never invoked; the caller
        // still gets a well-formed Offline-shaped report.
        let direct = match resolver.resolve(&url) {
            Ok(direct) => direct,
            Err(err) => {
                tracing::debug!(url, %err, "URL resolution failed");
                return ProbeReport::offline();
            }
        };
        match frames {
            Some(frames) => engine.probe_with_frames(&direct, frames),
            None => engine.probe(&direct),
        }
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("probe task failed: {e}"),
            }),
        )
    })?;

    let mut rng = rand::thread_rng();
    Ok(Json(ProbeResponse {
        status: report.status,
        latency: report
            .average_latency
            .map(|d| round_to_millis(d.as_secs_f64())),
        frame_drops: report.drop_count,
        bitrate: simulate::adaptive_bitrate(device, &mut rng),
        error_pattern: simulate::error_pattern(&mut rng).to_string(),
        device: device.display_name().to_string(),
        probed_at: Utc::now().to_rfc3339(),
    }))
}

/// Round seconds to 3 decimal places for display
fn round_to_millis(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}
