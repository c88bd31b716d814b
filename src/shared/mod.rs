pub mod error;
pub mod structs;
pub mod utility;

pub const INTERACTION_TYPE_PING: i64 = 1;
pub const INTERACTION_TYPE_APPLICATION_COMMAND: i64 = 2;

pub const CALLBACK_TYPE_PONG: i32 = 1;
pub const CALLBACK_TYPE_CHANNEL_MESSAGE_WITH_SOURCE: i32 = 4;

pub const HOME_MESSAGE: &str = "Interaction server is running! Use /interactions for Discord events.";
pub const INTERACTIONS_PROBE_MESSAGE: &str =
    "This is the /interactions endpoint. Use POST to interact with it.";

pub const UNKNOWN_INTERACTION_TYPE_MESSAGE: &str = "Unknown interaction type";
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";
