use axum::body::Bytes;
use axum::http::StatusCode;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::backtrace::Backtrace;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::shared::error::DispatchError;
use crate::shared::structs::discord::interaction::{
    CommandData, InteractionRequest, InteractionResponse, InteractionType,
};

type CommandHandler = fn(&CommandData) -> Result<InteractionResponse, DispatchError>;

lazy_static::lazy_static! {
    static ref COMMAND_REGISTRY: RwLock<HashMap<&'static str, CommandHandler>> = RwLock::new(HashMap::new());
}

/// Called by `#[command_handler]` before `main` runs.
pub fn register_command(name: &'static str, handler: CommandHandler) {
    COMMAND_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name, handler);
}

fn find_command(name: &str) -> Option<CommandHandler> {
    COMMAND_REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .copied()
}

pub async fn handle_interaction(request: Bytes) -> Response {
    let span = tracing::info_span!("interaction", request_id = %uuid::Uuid::now_v7());

    span.in_scope(|| {
        tracing::info!("Received interaction: {}", String::from_utf8_lossy(&request));

        match dispatch(&request) {
            Ok(response) => (StatusCode::OK, Json(response)).into_response(),
            Err(e) => {
                match &e {
                    DispatchError::UnknownInteractionType(kind) => {
                        tracing::error!("Unknown interaction type received: {}", kind);
                    }
                    _ => {
                        let backtrace = Backtrace::force_capture();
                        tracing::error!(
                            error = ?e,
                            "Error handling interaction: {}\n{}",
                            &e,
                            backtrace
                        );
                    }
                }
                e.error_response()
            }
        }
    })
}

/// Turns a raw interaction payload into the response to send back.
///
/// Pings are answered before anything else is looked at. Application commands are routed
/// through the command registry; names without a handler get a polite reply rather than an error.
pub fn dispatch(body: &[u8]) -> Result<InteractionResponse, DispatchError> {
    let payload = serde_json::from_slice::<Value>(body)?;
    if !payload.is_object() {
        return Err(DispatchError::MalformedRequest(
            "payload is not a JSON object".into(),
        ));
    }

    let request = serde_json::from_value::<InteractionRequest>(payload)?;

    match request.r#type {
        InteractionType::Ping => Ok(InteractionResponse::pong()),
        InteractionType::ApplicationCommand => handle_command_interaction(&request),
        InteractionType::Unknown(kind) => Err(DispatchError::UnknownInteractionType(kind)),
    }
}

fn handle_command_interaction(
    request: &InteractionRequest,
) -> Result<InteractionResponse, DispatchError> {
    let data = request.command_data()?;

    match find_command(&data.name) {
        Some(handler) => handler(&data),
        None => {
            tracing::warn!("Unknown command: {}", &data.name);
            Ok(InteractionResponse::channel_message(format!(
                "Unknown command: {}",
                &data.name
            )))
        }
    }
}
