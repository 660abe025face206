// Profile optimization: prompt building, the model round-trip, and reply parsing.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod service;
