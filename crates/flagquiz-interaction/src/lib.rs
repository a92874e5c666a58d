//! Integration layer for the flag quiz game.
//!
//! Implements the [`flagquiz_core::Oracle`] capability against the Gemini
//! REST API, with a deterministic fallback policy that keeps every game
//! operation playable when the API is unconfigured or unreachable.

pub mod config;
pub mod error;
pub mod fallback;
pub mod game_oracle;
pub mod gemini_client;
pub mod parse;
pub mod prompt;

pub use config::OracleConfig;
pub use error::OracleError;
pub use game_oracle::GameOracle;
pub use gemini_client::{CompletionClient, GeminiClient};
