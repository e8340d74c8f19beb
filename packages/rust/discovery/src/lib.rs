//! Long-tail keyword pattern discovery.
//!
//! Expands a head term into the long-tail patterns the pipeline tracks for
//! content generation. The expansion stands in for scraping search results
//! ("People Also Ask", "Related Searches"); no request is made, and the
//! template set below is the whole universe of discovered shapes.

use growthloop_shared::{GrowthLoopError, KeywordPattern, KeywordStatus, Result};
use tracing::{info, instrument};

/// Long-tail shapes expanded around the head term. `{query}` is replaced
/// with the (trimmed) query text.
const PATTERN_SHAPES: [&str; 3] = [
    "{query} vs [competitor]",
    "alternative to {query}",
    "{query} for [use case]",
];

/// Priority assigned to every freshly discovered pattern.
pub const DEFAULT_PRIORITY: i64 = 1;

/// Discover long-tail keyword patterns for a head-term query.
///
/// Returns one `Pending` pattern per template shape, all at
/// [`DEFAULT_PRIORITY`]. The query must contain at least one
/// non-whitespace character.
#[instrument]
pub fn discover_keywords(query: &str) -> Result<Vec<KeywordPattern>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(GrowthLoopError::validation(
            "discovery query must not be empty",
        ));
    }

    info!(query, "simulating keyword discovery against search results");

    let discovered = PATTERN_SHAPES
        .iter()
        .map(|shape| KeywordPattern {
            id: None,
            pattern: expand_shape(shape, query),
            head_term: query.to_string(),
            status: KeywordStatus::Pending,
            priority: DEFAULT_PRIORITY,
            avg_conversion_rate: None,
            url: None,
        })
        .collect();

    Ok(discovered)
}

/// Substitute the query into a pattern shape.
fn expand_shape(shape: &str, query: &str) -> String {
    shape.replace("{query}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_three_patterns_for_sample_query() {
        let patterns = discover_keywords("AI assistant").expect("discover");

        let texts: Vec<&str> = patterns.iter().map(|p| p.pattern.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "AI assistant vs [competitor]",
                "alternative to AI assistant",
                "AI assistant for [use case]",
            ]
        );
    }

    #[test]
    fn discovered_patterns_start_pending_at_default_priority() {
        let patterns = discover_keywords("meal planner").expect("discover");
        assert_eq!(patterns.len(), 3);

        for pattern in &patterns {
            assert_eq!(pattern.id, None);
            assert_eq!(pattern.head_term, "meal planner");
            assert_eq!(pattern.status, KeywordStatus::Pending);
            assert_eq!(pattern.priority, DEFAULT_PRIORITY);
            assert_eq!(pattern.avg_conversion_rate, None);
            assert_eq!(pattern.url, None);
        }
    }

    #[test]
    fn query_is_trimmed_before_expansion() {
        let patterns = discover_keywords("  AI assistant  ").expect("discover");
        assert_eq!(patterns[0].pattern, "AI assistant vs [competitor]");
        assert_eq!(patterns[0].head_term, "AI assistant");
    }

    #[test]
    fn empty_query_is_rejected() {
        let result = discover_keywords("");
        assert!(result.is_err());

        let result = discover_keywords("   ");
        assert!(result.unwrap_err().to_string().contains("must not be empty"));
    }

    #[test]
    fn expand_shape_substitutes_query() {
        assert_eq!(
            expand_shape("alternative to {query}", "note-taking app"),
            "alternative to note-taking app"
        );
    }
}
