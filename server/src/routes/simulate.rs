//! Heat pump estimate route.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use crate::services::heatpump::{
    CycleMode, CycleReport, DEFAULT_SINK_TEMP_C, DEFAULT_SOURCE_TEMP_C, HeatPump, Refrigerant, SimulationError,
};

#[derive(Debug, Default, Deserialize)]
pub struct SimulateQuery {
    pub refrigerant: Option<String>,
    pub mode: Option<String>,
    pub source_temp: Option<f64>,
    pub sink_temp: Option<f64>,
}

impl IntoResponse for SimulationError {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Apply defaults and run one estimate.
///
/// # Errors
///
/// Returns [`SimulationError`] for unknown names or impossible temperatures.
pub fn run_query(query: &SimulateQuery) -> Result<CycleReport, SimulationError> {
    let refrigerant = query.refrigerant.as_deref().map(str::parse::<Refrigerant>).transpose()?.unwrap_or_default();
    let mode = query.mode.as_deref().map(str::parse::<CycleMode>).transpose()?.unwrap_or_default();
    let source_c = query.source_temp.unwrap_or(DEFAULT_SOURCE_TEMP_C);
    let sink_c = query.sink_temp.unwrap_or(DEFAULT_SINK_TEMP_C);

    HeatPump::new(refrigerant).simulate(mode, source_c, sink_c)
}

/// `GET /api/simulate` — CoP and energy rates for one operating point.
pub async fn simulate(Query(query): Query<SimulateQuery>) -> Result<Json<CycleReport>, SimulationError> {
    match run_query(&query) {
        Ok(report) => {
            tracing::debug!(refrigerant = %report.refrigerant, cop = report.cop, "simulated cycle");
            Ok(Json(report))
        }
        Err(e) => {
            tracing::debug!(error = %e, "simulation rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
#[path = "simulate_test.rs"]
mod tests;
