use crate::config::CorsConfig;
use crate::handlers;
use crate::AppState;
use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Routes used by the web storefront share a single-origin CORS policy;
/// order routes are origin-unrestricted. No route requires authentication.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    let frontend_cors = CorsLayer::new()
        .allow_origin(
            cors.frontend_origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000")),
        )
        .allow_methods(Any)
        .allow_headers(Any);

    let public_cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend_routes = Router::new()
        .route("/api/auth/login", post(handlers::login_handler))
        .route("/api/auth/register", post(handlers::register_handler))
        .route(
            "/api/profile",
            get(handlers::get_profile_handler).put(handlers::update_profile_handler),
        )
        .route(
            "/api/products",
            get(handlers::list_products_handler).post(handlers::create_product_handler),
        )
        .route("/api/products/mine", post(handlers::my_products_handler))
        .route(
            "/api/products/{id}",
            delete(handlers::delete_product_handler),
        )
        .layer(frontend_cors);

    let order_routes = Router::new()
        .route(
            "/api/orders",
            get(handlers::list_orders_handler).post(handlers::place_order_handler),
        )
        .layer(public_cors);

    Router::new()
        .merge(frontend_routes)
        .merge(order_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
