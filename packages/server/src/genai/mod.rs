mod client;
mod config;
mod prompt;

pub use client::{GeminiClient, LlmClient};
#[cfg(test)]
pub use client::test_support::MockLlmClient;
pub use config::GeminiConfig;
pub use prompt::{bill_lookup_prompt, generate_analysis, identify_bills, legal_analysis_prompt};
