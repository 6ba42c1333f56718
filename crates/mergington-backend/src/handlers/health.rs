use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use mergington::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use mergington::log;

use crate::services::ActivityService;

fn human_readable_uptime(uptime_seconds: i64) -> String {
    let days = uptime_seconds / 86400;
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(started_at: DateTime<Utc>, now: DateTime<Utc>) -> UptimeInfo {
    let seconds = now.signed_duration_since(started_at).num_seconds().max(0);
    UptimeInfo {
        seconds,
        human: human_readable_uptime(seconds),
    }
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let now = Utc::now();
    let activity_count = state.activities.len().await;

    let health_response = HealthResponse {
        status: if activity_count > 0 {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        },
        timestamp: now.to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: service_uptime(state.started_at, now),
        services: ServiceInfo {
            activities: "up".to_string(),
            activity_count,
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}
