use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::TokenService;
use crate::config::Config;
use crate::db::Store;
use crate::services::{AuthService, EquipmentService, SeaOrmAuthService, SeaOrmEquipmentService};

pub mod auth;
pub mod equipment;
mod error;
mod observability;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

/// Process-wide state shared by all handlers. Nothing here is mutated after
/// startup.
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub tokens: Arc<TokenService>,

    pub auth_service: Arc<dyn AuthService>,

    pub equipment_service: Arc<dyn EquipmentService>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }
}

/// Builds the application state from an already-opened store.
///
/// Fails when the token signing secret is not configured.
pub fn create_app_state(
    config: Config,
    store: Store,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let tokens = Arc::new(TokenService::from_config(&config.auth)?);

    let auth_service = Arc::new(SeaOrmAuthService::new(store.clone(), tokens.clone()))
        as Arc<dyn AuthService>;
    let equipment_service = Arc::new(SeaOrmEquipmentService::new(store.clone()))
        as Arc<dyn EquipmentService>;

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        store,
        tokens,
        auth_service,
        equipment_service,
        prometheus_handle,
    }))
}

/// Validates configuration, opens the store and builds the state.
pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    config.validate()?;

    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    create_app_state(config, store, prometheus_handle)
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let protected_routes = create_protected_router(state.clone());

    let api_router = Router::new()
        .merge(protected_routes)
        .route("/auth/login", post(auth::login))
        .route("/health", get(system::health))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/me", get(auth::current_user))
        .route("/equipment", get(equipment::list_equipment))
        .route(
            "/equipment/{id}",
            get(equipment::get_equipment).put(equipment::update_equipment),
        )
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn_with_state(state, auth::require_auth))
}
