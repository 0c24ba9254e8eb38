pub mod rest;
pub mod state;

use axum::{routing::get, Router};
use rest::ApiDoc;
use state::AppState;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use rest::{
    add_form_handler, create_intern_handler, dashboard_handler, export_interns_handler,
    get_intern_handler, health_handler, list_departments_handler, list_interns_handler,
};

/// Builds the full application router, Swagger UI included.
pub fn router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/health", get(health_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/departments", get(list_departments_handler))
        .route("/interns", get(list_interns_handler).post(create_intern_handler))
        .route("/interns/export", get(export_interns_handler))
        .route("/interns/new", get(add_form_handler))
        .route("/interns/{id}", get(get_intern_handler))
        .with_state(app_state);

    Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
