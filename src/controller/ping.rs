use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::shared::{HOME_MESSAGE, INTERACTIONS_PROBE_MESSAGE};

pub async fn home() -> Response {
    (StatusCode::OK, HOME_MESSAGE).into_response()
}

/// Plain GET on the interaction endpoint, for checking the route is reachable from a browser.
pub async fn probe_interactions() -> Response {
    (StatusCode::OK, INTERACTIONS_PROBE_MESSAGE).into_response()
}
