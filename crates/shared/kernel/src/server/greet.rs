use super::GREETING_TAG;
use crate::greeting::GreetingService;
use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GreetQuery {
    /// Who to greet; blank or missing greets the world.
    pub name: Option<String>,
}

impl GreetQuery {
    /// Picks the first `name` from raw query pairs; repeated keys are not an error.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let name = pairs.into_iter().find_map(|(key, value)| (key == "name").then_some(value));
        Self { name }
    }
}

/// Resolved environment and feature flag.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub environment: String,
    pub feature_enabled: bool,
}

#[utoipa::path(
    get,
    path = "/greet",
    params(GreetQuery),
    responses((status = OK, description = "Greeting text", body = String, content_type = "text/plain")),
    tag = GREETING_TAG,
)]
pub(super) async fn greet_handler(
    State(service): State<GreetingService>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> String {
    let query = GreetQuery::from_pairs(pairs);
    let greeting = service.greet(query.name.as_deref());
    debug!(name = ?query.name, %greeting, "Greeting computed");
    greeting
}

#[utoipa::path(
    get,
    path = "/info",
    responses((status = OK, description = "Active environment and feature flag", body = InfoResponse)),
    tag = GREETING_TAG,
)]
pub(super) async fn info_handler(State(service): State<GreetingService>) -> Json<InfoResponse> {
    Json(InfoResponse {
        environment: service.environment().to_owned(),
        feature_enabled: service.is_feature_enabled(),
    })
}
