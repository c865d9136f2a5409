use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::role::require_administrator;
use crate::modules::auth::router::init_auth_router;
use crate::modules::products::router::{init_admin_products_router, init_products_router};
use crate::modules::users::router::{init_admin_users_router, init_profile_router};
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::routing::get_service;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    let admin_router = Router::new()
        .route("/", get_service(ServeFile::new("public/admin.html")))
        .nest("/users", init_admin_users_router())
        .nest("/products", init_admin_products_router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_administrator,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_auth_router())
        .merge(init_products_router())
        .merge(init_profile_router())
        .nest("/admin", admin_router)
        .fallback_service(ServeDir::new("public"))
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
