//! # Server Configuration
//!
//! Router, shared state and lifecycle of the HTTP presentation layer.

use axum::{
    Router,
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::{ApiError, ErrorType};
use crate::handlers::{self, analytics, departments, employees, jobs};
use crate::store::DirectoryStore;
use crate::telemetry::{TRACE_ID_HEADER, TraceContext, with_trace_context};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub store: DirectoryStore,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/employees",
            get(employees::list_employees).post(employees::add_employee),
        )
        .route("/employees/managers", get(employees::list_managers))
        .route(
            "/employees/form-options",
            get(employees::employee_form_options),
        )
        .route("/jobs", get(jobs::list_jobs).post(jobs::add_job))
        .route(
            "/departments",
            get(departments::list_departments).post(departments::add_department),
        )
        .route("/analytics", get(analytics::overview))
        .route("/analytics/headcount", get(analytics::headcount))
        .route("/analytics/job-salaries", get(analytics::job_salaries))
        .route("/analytics/salary-summary", get(analytics::salary_summary));

    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .nest("/api/v1", api)
        .fallback(not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(propagate_trace_id))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ErrorType::NotFound.into()
}

/// Scopes every request under a trace id taken from `x-trace-id` (or
/// generated) and echoes it on the response
async fn propagate_trace_id(request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let context = TraceContext {
        trace_id: trace_id.clone(),
    };
    let mut response = with_trace_context(context, next.run(request)).await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }
    response
}

/// Starts the server and serves until Ctrl-C
pub async fn run_server(config: AppConfig, store: DirectoryStore) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    let app = create_app(AppState { store });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, profile = %config.profile, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::employees::list_employees,
        crate::handlers::employees::add_employee,
        crate::handlers::employees::list_managers,
        crate::handlers::employees::employee_form_options,
        crate::handlers::jobs::list_jobs,
        crate::handlers::jobs::add_job,
        crate::handlers::departments::list_departments,
        crate::handlers::departments::add_department,
        crate::handlers::analytics::overview,
        crate::handlers::analytics::headcount,
        crate::handlers::analytics::job_salaries,
        crate::handlers::analytics::salary_summary,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::EmployeeRecord,
            crate::models::EmployeeSummary,
            crate::models::DepartmentHeadcount,
            crate::models::JobSalaryAverage,
            crate::models::SalarySummary,
            crate::handlers::types::CreatedResponse,
            crate::handlers::types::Choice,
            crate::error::ApiError,
        )
    ),
    tags(
        (name = "employees", description = "Employee directory"),
        (name = "jobs", description = "Job catalog"),
        (name = "departments", description = "Departments"),
        (name = "analytics", description = "Headcount and salary reports"),
    ),
    info(
        title = "HR Directory API",
        description = "Employees, jobs, departments and salary reports",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
