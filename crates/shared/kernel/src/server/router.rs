use super::{ApiState, greet, health};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn system_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(health::health_handler))
}

pub fn greeting_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(greet::greet_handler))
        .routes(routes!(greet::info_handler))
}

/// Every kernel route, still missing its state.
pub fn api_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().merge(system_router()).merge(greeting_router())
}
