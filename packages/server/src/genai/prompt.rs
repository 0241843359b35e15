//! Prompts for bill lookup and legal analysis, and the calls that use them.

use serde_json::Value;

use crate::error::GenAiError;
use crate::genai::client::LlmClient;

/// Instruction prepended to the user's message for bill lookup.
///
/// The answer format is what [`lawchat_congress::parse_bill_lookup`]
/// expects. Models do not always comply, so the parser stays strict.
const BILL_LOOKUP_INSTRUCTION: &str = "\
You are a lookup machine for the Congress.gov bill API. \
Return only the ids of the 3 bills most relevant to the user's input, \
sorted by relevance: the first must be relevant, the third may be less so. \
Return ONLY the bill ids and congress numbers and nothing else, each in the \
form hr.1234.118 (bill type, bill number, congress), separated by a bar (|). \
This is the user's input: ";

/// Build the bill lookup prompt for a user message.
pub fn bill_lookup_prompt(user_message: &str) -> String {
    format!("{BILL_LOOKUP_INSTRUCTION}{user_message}")
}

/// Build the legal analysis prompt.
///
/// String bills are embedded verbatim; anything else as compact JSON.
pub fn legal_analysis_prompt(user_message: &str, bills: &Value) -> String {
    let bills = match bills {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    format!(
        r#"You are a legal expert providing detailed analysis. The user has asked: "{user_message}"

The relevant bills identified are: {bills}

Please provide a comprehensive legal analysis that includes:
1. How these bills relate to the user's situation
2. The legal implications and potential outcomes
3. What the user should know about these bills
4. Any relevant legal precedents or considerations
5. Practical next steps or recommendations

Write in a clear, professional tone that a layperson can understand. Focus on practical legal advice and implications."#
    )
}

/// Ask the model which bills relate to `user_message`.
///
/// Returns the raw model text; parse it with
/// [`lawchat_congress::parse_bill_lookup`].
pub async fn identify_bills(
    client: &dyn LlmClient,
    user_message: &str,
) -> Result<String, GenAiError> {
    client.generate(&bill_lookup_prompt(user_message)).await
}

/// Ask the model for a legal analysis of `bills` in light of `user_message`.
pub async fn generate_analysis(
    client: &dyn LlmClient,
    user_message: &str,
    bills: &Value,
) -> Result<String, GenAiError> {
    client
        .generate(&legal_analysis_prompt(user_message, bills))
        .await
}
