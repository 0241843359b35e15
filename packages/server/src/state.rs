use std::sync::Arc;

use lawchat_congress::CongressClient;

use crate::genai::LlmClient;

/// Shared, immutable dependencies handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no Gemini API key is configured.
    pub llm: Option<Arc<dyn LlmClient>>,
    pub congress: Arc<CongressClient>,
}

impl AppState {
    pub fn new(llm: Option<Arc<dyn LlmClient>>, congress: CongressClient) -> Self {
        Self {
            llm,
            congress: Arc::new(congress),
        }
    }
}
