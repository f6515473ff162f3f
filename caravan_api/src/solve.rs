use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use caravan_solver::json::types::{JsonSolution, JsonSolveRequest};
use caravan_solver::solver::{self, params::SolverParams};

use crate::error::ApiError;

pub struct SolveResponse {
    solution: JsonSolution,
}

impl IntoResponse for SolveResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.solution)).into_response()
    }
}

pub async fn post_solve_handler(
    Json(body): Json<JsonSolveRequest>,
) -> Result<SolveResponse, ApiError> {
    let problem = body.build_problem()?;

    let solution = solver::solve(&problem, &SolverParams::default())?;

    Ok(SolveResponse {
        solution: JsonSolution::from(&solution),
    })
}
