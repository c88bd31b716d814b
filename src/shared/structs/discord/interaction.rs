use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::error::DispatchError;
use crate::shared::{
    CALLBACK_TYPE_CHANNEL_MESSAGE_WITH_SOURCE, CALLBACK_TYPE_PONG,
    INTERACTION_TYPE_APPLICATION_COMMAND, INTERACTION_TYPE_PING,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Unknown(Value),
}

impl Default for InteractionType {
    fn default() -> Self {
        InteractionType::Unknown(Value::Null)
    }
}

impl From<Value> for InteractionType {
    fn from(value: Value) -> Self {
        let discriminator = value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        });

        match discriminator {
            Some(INTERACTION_TYPE_PING) => InteractionType::Ping,
            Some(INTERACTION_TYPE_APPLICATION_COMMAND) => InteractionType::ApplicationCommand,
            _ => InteractionType::Unknown(value),
        }
    }
}

/// Envelope of an incoming interaction.
///
/// `data` stays untyped until the interaction is known to be an application command,
/// so a ping is acknowledged whatever else it carries.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionRequest {
    #[serde(rename = "type", default)]
    pub r#type: InteractionType,
    #[serde(default)]
    pub data: Option<Value>,
}

impl InteractionRequest {
    pub fn command_data(&self) -> Result<CommandData, DispatchError> {
        let data = self
            .data
            .clone()
            .ok_or_else(|| DispatchError::MalformedRequest("missing `data`".into()))?;

        serde_json::from_value::<CommandData>(data)
            .map_err(|e| DispatchError::MalformedRequest(format!("invalid `data`: {e}")))
    }
}

/// Only `name` is typed up front. `options` stays raw JSON and is read by the handlers that
/// need it, so a command that takes no options never fails on them.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default)]
    pub options: Option<Value>,
}

impl CommandData {
    /// Value of the first option, rendered as text.
    pub fn first_option_value(&self) -> Result<String, DispatchError> {
        let option = self
            .options
            .as_ref()
            .and_then(Value::as_array)
            .and_then(|options| options.first())
            .ok_or_else(|| {
                DispatchError::MalformedRequest(format!("command `{}` has no options", &self.name))
            })?;

        match option.get("value") {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Null) | None => Err(DispatchError::MalformedRequest(format!(
                "first option of command `{}` has no value",
                &self.name
            ))),
            Some(other) => Ok(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InteractionResponse {
    pub r#type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionCallbackData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        InteractionResponse {
            r#type: CALLBACK_TYPE_PONG,
            data: None,
        }
    }

    pub fn channel_message(content: impl Into<String>) -> Self {
        InteractionResponse {
            r#type: CALLBACK_TYPE_CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(InteractionCallbackData {
                content: content.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InteractionCallbackData {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
