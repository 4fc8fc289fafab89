// Career chat: classify the message, compose a prompt, answer or stream.
// Model calls go through llm_client; streaming goes through relay.

pub mod classifier;
pub mod handlers;
pub mod prompts;
