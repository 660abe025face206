pub mod client;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod optimizer;
pub mod routes;
pub mod state;
