//! REST API Server for the Financial Insights Agent
//!
//! Exposes the aggregator, the agent, and the tool registry via HTTP
//! endpoints. Integrates with frontend UI.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use uuid::Uuid;

use crate::agent::FinancialAgent;
use crate::error::AgentError;
use crate::models::ToolInput;
use crate::tools::ToolRegistry;

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub country_name: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct ToolCallRequest {
    pub tool_name: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub request_id: Uuid,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            request_id: Uuid::new_v4(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            request_id: Uuid::new_v4(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<FinancialAgent>,
    pub registry: Arc<ToolRegistry>,
}

fn error_status(error: &AgentError) -> StatusCode {
    match error {
        AgentError::UnknownCountry(_)
        | AgentError::UnknownExchange(_)
        | AgentError::ToolNotFound(_) => StatusCode::NOT_FOUND,
        AgentError::InvalidToolInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Report Endpoint
/// =============================

async fn get_report(
    State(state): State<ApiState>,
    Json(req): Json<ReportRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!(country = %req.country_name, "Received report request");

    match state.agent.report(&req.country_name).await {
        Ok(report) => (StatusCode::OK, Json(ApiResponse::success(report))),
        Err(e) => (error_status(&e), Json(ApiResponse::error(e.to_string()))),
    }
}

/// =============================
/// Query Endpoint
/// =============================

async fn run_query(
    State(state): State<ApiState>,
    Json(req): Json<QueryRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!(query = %req.query, "Received query request");

    match state.agent.query(&req.query).await {
        Ok(reply) => (StatusCode::OK, Json(ApiResponse::success(reply))),
        Err(e) => (error_status(&e), Json(ApiResponse::error(e.to_string()))),
    }
}

/// =============================
/// Tool Endpoints
/// =============================

async fn list_tools(State(state): State<ApiState>) -> Json<ApiResponse> {
    Json(ApiResponse::success(state.registry.descriptors()))
}

async fn call_tool(
    State(state): State<ApiState>,
    Json(req): Json<ToolCallRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!(tool_name = %req.tool_name, "Received tool call");

    let Some(tool) = state.registry.get(&req.tool_name) else {
        let error = AgentError::ToolNotFound(req.tool_name);
        return (error_status(&error), Json(ApiResponse::error(error.to_string())));
    };

    let input = ToolInput {
        tool_name: req.tool_name,
        parameters: req.parameters,
    };

    match tool.execute(&input).await {
        Ok(output) => (StatusCode::OK, Json(ApiResponse::success(output))),
        Err(e) => (error_status(&e), Json(ApiResponse::error(e.to_string()))),
    }
}

/// =============================
/// Router
/// =============================

pub fn create_router(agent: Arc<FinancialAgent>, registry: Arc<ToolRegistry>) -> Router {
    let state = ApiState { agent, registry };

    Router::new()
        .route("/health", get(health))
        .route("/api/report", post(get_report))
        .route("/api/query", post(run_query))
        .route("/api/tools", get(list_tools))
        .route("/api/tools/call", post(call_tool))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    agent: Arc<FinancialAgent>,
    registry: Arc<ToolRegistry>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(agent, registry);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
