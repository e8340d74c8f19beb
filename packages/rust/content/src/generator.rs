//! SEO article generation (simulated LLM call).

use growthloop_shared::{KeywordPattern, KeywordStatus, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A generated article ready for publishing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article title (the keyword pattern itself).
    pub title: String,
    /// Article body as HTML.
    pub html: String,
}

/// Return the next `Pending` keyword pattern.
///
/// The backing store is not wired up; the fixed sample row is returned, as
/// a real read of the pattern queue would.
pub fn fetch_pending_pattern() -> KeywordPattern {
    info!("simulating retrieval of a pending keyword pattern from the store");

    KeywordPattern {
        id: Some(1),
        pattern: "AI assistant vs human assistant".into(),
        head_term: "AI assistant".into(),
        status: KeywordStatus::Pending,
        priority: 1,
        avg_conversion_rate: None,
        url: None,
    }
}

/// Build the generation prompt for a keyword pattern.
pub fn build_prompt(pattern: &KeywordPattern) -> String {
    format!(
        "Write a detailed, SEO-optimized article comparing {}. \
         Focus on benefits, drawbacks, and use cases. \
         Include an introduction, several body paragraphs, and a conclusion.",
        pattern.pattern
    )
}

/// Generate an SEO article for a keyword pattern.
///
/// Stands in for a generative-text API call with `model`; emits the fixed
/// placeholder body instead.
#[instrument(skip(pattern), fields(pattern = %pattern.pattern))]
pub fn generate_article(pattern: &KeywordPattern, model: &str) -> Result<Article> {
    let prompt = build_prompt(pattern);
    info!(model, prompt_len = prompt.len(), "simulating article generation");

    let html = format!(
        "<h1>{pattern}</h1>\n\
         <p>This is a placeholder article content generated for the keyword pattern: {pattern}.</p>\n\
         <p>It would typically be a comprehensive, SEO-optimized article.</p>",
        pattern = pattern.pattern
    );

    Ok(Article {
        title: pattern.pattern.clone(),
        html,
    })
}
