use command_macros::command_handler;

use crate::shared::error::DispatchError;
use crate::shared::structs::discord::interaction::{CommandData, InteractionResponse};

#[command_handler]
pub fn describe(data: &CommandData) -> Result<InteractionResponse, DispatchError> {
    let image_url = data.first_option_value()?;

    tracing::info!("Processing /describe command for URL: {}", &image_url);

    Ok(InteractionResponse::channel_message(format!(
        "Describing image: {image_url}"
    )))
}
