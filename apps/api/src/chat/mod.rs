// Advising chat: retrieve catalog passages, then answer through llm_client.

pub mod advisor;
pub mod handlers;
pub mod prompts;
pub mod retriever;
