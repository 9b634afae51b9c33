use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use entity::employees::{Model as Employee, NewEmployee};
use platform_api::{ApiError, ApiResult};
use platform_store::EmployeeStore;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{config::AppConfig, repr};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EmployeeStore>,
    pub config: Arc<AppConfig>,
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve(config: ServeConfig, state: AppState) -> anyhow::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, "employee server listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };
    CorsLayer::new()
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_origin(allow_origin)
}

pub fn build_router(state: AppState) -> Router {
    let request_id = MakeRequestUuid;
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/health", get(health_handler))
        .route("/employees", get(list_employees).post(add_employee))
        .route("/employees/count", get(employee_count))
        .route(
            "/employees/{id}",
            get(get_one_employee).put(replace_employee),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), request_id))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config.cors_allowed_origins)),
        )
        .with_state(state)
}

async fn list_employees(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    repr::employee_list(&headers, &state.store.find_all())
}

async fn get_one_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let employee = state.store.find_one(&id).ok_or_else(|| not_found(&id))?;
    repr::employee(&headers, &employee)
}

async fn employee_count(State(state): State<AppState>) -> String {
    state.store.count().to_string()
}

async fn add_employee(
    State(state): State<AppState>,
    Json(payload): Json<NewEmployee>,
) -> impl IntoResponse {
    let saved = state.store.save(payload);
    let location = format!("/employees/{}", saved.id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved),
    )
}

async fn replace_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewEmployee>,
) -> ApiResult<Json<Employee>> {
    let replaced = state
        .store
        .replace(&id, payload)
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(replaced))
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Employee not found with id {id}"))
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        employees: state.store.count(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    employees: usize,
    version: &'static str,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    ctrl_c.await;

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
}
