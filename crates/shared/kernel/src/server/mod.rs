//! HTTP surface: shared state, handlers and `OpenAPI`-aware routers.

mod greet;
mod health;
pub mod router;
mod state;

pub use greet::{GreetQuery, InfoResponse};
pub use health::HealthResponse;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};

/// `OpenAPI` tag for service-level endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for greeting endpoints.
pub const GREETING_TAG: &str = "Greeting";
