use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{pets, system, toys};
use crate::middleware::{optional_token, require_token};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .merge(public_routes(state.clone()))
        .merge(protected_routes(state.clone()))
        .layer(cors_layer(&state.config.security.cors_origins));

    let router = if state.config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

fn public_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/pets/:pet_id", get(pets::show))
        // The only public route that looks at the requester
        .route(
            "/toys/:pet_id",
            post(toys::create).route_layer(from_fn_with_state(state, optional_token)),
        )
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/pets", post(pets::create))
        .route(
            "/toys/:pet_id/:toy_id",
            patch(toys::update).delete(toys::destroy),
        )
        .route_layer(from_fn_with_state(state, require_token))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(origins)
}
