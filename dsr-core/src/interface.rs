pub mod client;
pub mod llm;
pub mod server;
