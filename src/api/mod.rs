pub mod client;
pub mod models;
pub mod response;

pub use client::{LlmClient, OpenAiClient};
pub use models::{AssistantReply, RequestBody};
pub use response::parse_reply;
