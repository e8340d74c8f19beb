//! Article publishing (simulated CMS REST call).

use growthloop_shared::{GrowthLoopError, KeywordPattern, KeywordStatus, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use url::Url;

use crate::generator::Article;

/// Outcome of publishing an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedArticle {
    /// Where the article now lives.
    pub url: Url,
    /// The keyword pattern, moved to `Published` with its URL recorded.
    pub pattern: KeywordPattern,
}

/// Turn a keyword pattern into its URL slug: lowercase, spaces as dashes.
pub fn slugify(pattern: &str) -> String {
    pattern.replace(' ', "-").to_lowercase()
}

/// Publish a generated article for its keyword pattern.
///
/// Stands in for a CMS publish plus the store update that flips the pattern
/// to `Published`. The returned pattern carries the article URL.
#[instrument(skip(article, pattern), fields(pattern = %pattern.pattern))]
pub fn publish_article(
    article: &Article,
    pattern: &KeywordPattern,
    base_url: &Url,
) -> Result<PublishedArticle> {
    let slug = slugify(&pattern.pattern);
    let url = base_url.join(&slug).map_err(|e| {
        GrowthLoopError::validation(format!(
            "cannot build article URL from '{base_url}' and slug '{slug}': {e}"
        ))
    })?;

    info!(
        title = %article.title,
        %url,
        body_len = article.html.len(),
        "simulating CMS publish"
    );
    info!(
        id = ?pattern.id,
        status = %KeywordStatus::Published,
        "simulating store update for published pattern"
    );

    let mut published = pattern.clone();
    published.status = KeywordStatus::Published;
    published.url = Some(url.to_string());

    Ok(PublishedArticle {
        url,
        pattern: published,
    })
}
