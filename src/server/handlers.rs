use crate::error::AppError;
use crate::models::ResolvedReport;
use crate::pipeline::AirQualityService;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Serialize)]
struct ApiErrorBody {
    error: &'static str,
}

/// Maps a pipeline failure onto its public status and message.
pub struct ApiError(AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let class = self.0.class();
        let status =
            StatusCode::from_u16(class.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ApiErrorBody {
            error: class.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Deserialize)]
pub struct AqiParams {
    pub city: Option<String>,
}

// ─── GET /api/aqi ────────────────────────────────────────────────

pub async fn get_aqi(
    State(service): State<AirQualityService>,
    Query(params): Query<AqiParams>,
) -> Result<Json<ResolvedReport>, ApiError> {
    let city = params.city.unwrap_or_default();
    match service.resolve_isolated(city.clone()).await {
        Ok(report) => {
            info!("Served AQI for '{}': {}", report.query, report.assessment.level);
            Ok(Json(report))
        },
        Err(e) => {
            warn!("AQI lookup for '{}' failed: {}", city, e);
            Err(ApiError(e))
        },
    }
}
