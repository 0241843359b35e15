//! HTML page handlers.

use askama::Template;
use axum::extract::Query;
use axum::response::Html;

use crate::error::ApiError;
use crate::models::ResultsQuery;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

#[derive(Template)]
#[template(path = "chat.html")]
pub struct ChatTemplate {}

#[derive(Template)]
#[template(path = "laws.html")]
pub struct LawsTemplate {}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub user_message: String,
    pub gemini_response: String,
}

fn render(template: &impl Template) -> Result<Html<String>, ApiError> {
    Ok(Html(template.render()?))
}

pub async fn index() -> Result<Html<String>, ApiError> {
    render(&IndexTemplate {})
}

pub async fn chat() -> Result<Html<String>, ApiError> {
    render(&ChatTemplate {})
}

pub async fn laws() -> Result<Html<String>, ApiError> {
    render(&LawsTemplate {})
}

/// Results page echoing the chat exchange from the query string.
pub async fn results(Query(query): Query<ResultsQuery>) -> Result<Html<String>, ApiError> {
    let ResultsQuery {
        user_message,
        gemini_response,
    } = query;

    render(&ResultsTemplate {
        user_message,
        gemini_response,
    })
}
