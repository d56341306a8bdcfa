use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Allow cross-origin requests from any origin, with any method and header.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
