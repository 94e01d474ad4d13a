//! AWS Lambda handler for running a revenue projection
//!
//! Accepts the projection inputs as a JSON body (any omitted field takes its
//! default) and returns the monthly rows, summary and chart series. Inputs
//! outside the slider ranges are rejected with 400 unless `clamp` is set.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use saas_projector::{
    report::ChartSeries, InputBounds, ProjectionDataPoint, ProjectionEngine, ProjectionInputs,
    ProjectionSummary, ProjectorError,
};
use serde::{Deserialize, Serialize};

/// Request body: the six inputs plus an optional bounds policy
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub inputs: ProjectionInputs,

    /// Pull inputs into the slider ranges before projecting
    #[serde(default)]
    pub clamp: bool,
}

/// Output from the projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub inputs: ProjectionInputs,
    pub summary: ProjectionSummary,
    pub data_points: Vec<ProjectionDataPoint>,
    pub chart: ChartSeries,
    pub execution_time_ms: u64,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    Ok(cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

fn json_response(body: &ProjectionResponse) -> Result<Response<Body>, Error> {
    Ok(cors(Response::builder())
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

fn build_response(
    request: ProjectionRequest,
    start: std::time::Instant,
) -> Result<ProjectionResponse, ProjectorError> {
    let bounds = InputBounds::default();
    let inputs = if request.clamp {
        bounds.clamp(&request.inputs)
    } else {
        bounds.validate(&request.inputs)?;
        request.inputs
    };

    let result = ProjectionEngine::new(inputs).run();
    let chart = ChartSeries::from_rows(&result.data_points);

    Ok(ProjectionResponse {
        inputs,
        summary: result.summary(),
        chart,
        data_points: result.data_points,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

/// Parse a request body and project it, mapping bad input to 400
fn respond(body: &str, start: std::time::Instant) -> Result<Response<Body>, Error> {
    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    log::info!("projecting {:?}", request.inputs);
    match build_response(request, start) {
        Ok(response) => json_response(&response),
        Err(e) => {
            log::warn!("rejected request: {}", e);
            error_response(400, &e.to_string())
        }
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    respond(&body_str, start)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
