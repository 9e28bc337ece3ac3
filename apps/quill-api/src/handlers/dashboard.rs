//! Author dashboard endpoints.
//!
//! View tracking does not exist yet, so both endpoints serve fixed mock
//! data. The shapes are final; only the numbers are placeholders.
//! TODO: replace the stats fixture with real aggregation once a view
//! counter table lands.

use actix_web::{HttpResponse, web};
use chrono::{Duration, Utc};
use serde::Deserialize;

use quill_shared::dto::{ChartPoint, DashboardStats};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};

/// GET /api/dashboard/stats
pub async fn stats(_identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(DashboardStats {
        total_posts: 150,
        total_views: 25_000,
        total_users: 1_200,
        posts_growth: 12.5,
        views_growth: 8.3,
        last_updated: Utc::now(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ChartParams {
    pub range: Option<String>,
}

/// GET /api/dashboard/chart?range=7d|30d|90d
pub async fn chart(_identity: Identity, params: web::Query<ChartParams>) -> AppResult<HttpResponse> {
    let days = match params.range.as_deref() {
        None | Some("7d") => 7,
        Some("30d") => 30,
        Some("90d") => 90,
        Some(other) => {
            return Err(AppError::BadRequest(format!("Unknown range: {other}")));
        }
    };

    Ok(HttpResponse::Ok().json(mock_series(days)))
}

/// Deterministic stand-in traffic. The same range always yields the same
/// series so chart snapshots are stable.
fn mock_series(days: u64) -> Vec<ChartPoint> {
    let today = Utc::now().date_naive();

    (0..days)
        .map(|i| {
            let date = today - Duration::days((days - 1 - i) as i64);
            ChartPoint {
                date: date.format("%m/%d").to_string(),
                views: 400 + (i * 97) % 600,
                visitors: 150 + (i * 53) % 350,
                engagement: ((i * 29) % 100) as f64,
            }
        })
        .collect()
}
