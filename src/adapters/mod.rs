//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - inference providers (OpenAI, Anthropic, mock)
//! - `http` - axum REST surface for the wizard and the assistant

pub mod ai;
pub mod http;
