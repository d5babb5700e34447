mod client;
mod types;

pub use client::{OpenAiClient, TextGenerator};
pub use types::Completion;
