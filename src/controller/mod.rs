use axum::{Router, routing::get};

use crate::controller::discord::interaction::handle_interaction;
use crate::controller::ping::{home, probe_interactions};

pub mod discord;
pub mod ping;

pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route(
            "/interactions",
            get(probe_interactions).post(handle_interaction),
        )
}
