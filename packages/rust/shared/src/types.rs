//! Core domain types for the growthloop content pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// RunId
// ---------------------------------------------------------------------------

/// A UUID v7 wrapper identifying one CLI pipeline run (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Generate a new time-sortable run identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RunId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ---------------------------------------------------------------------------
// KeywordPattern
// ---------------------------------------------------------------------------

/// Lifecycle status of a keyword pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordStatus {
    /// Discovered, not yet turned into a published article.
    Pending,
    /// An article for this pattern has been published.
    Published,
}

impl std::fmt::Display for KeywordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Published => write!(f, "Published"),
        }
    }
}

/// A candidate long-tail search phrase tracked for content-generation
/// prioritization.
///
/// Freshly discovered patterns have no `id`; only rows fabricated as store
/// reads carry one. `url` is set when the pattern's article is published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordPattern {
    /// Store identifier, when the record has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The long-tail search phrase.
    pub pattern: String,
    /// The head term the pattern was expanded from.
    pub head_term: String,
    /// Lifecycle status.
    pub status: KeywordStatus,
    /// Content-generation priority (higher is better).
    pub priority: i64,
    /// Average observed conversion rate, once analytics has seen it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_conversion_rate: Option<f64>,
    /// Published article URL, set by the publishing step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// UgcSubmission
// ---------------------------------------------------------------------------

/// Lifecycle status of a UGC submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UgcStatus {
    /// Collected, awaiting curation.
    Pending,
    /// Passed brand-safety review.
    Curated,
    /// Failed brand-safety review.
    Rejected,
    /// Re-published as a community-spotlight post.
    Spotlighted,
}

impl std::fmt::Display for UgcStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Curated => write!(f, "Curated"),
            Self::Rejected => write!(f, "Rejected"),
            Self::Spotlighted => write!(f, "Spotlighted"),
        }
    }
}

/// A social-media post referencing a campaign hashtag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UgcSubmission {
    /// Store identifier, when the record has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The post text as collected from the platform.
    pub post_content: String,
    /// Platform name (e.g., "Twitter", "Instagram").
    pub platform: String,
    /// The campaign hashtag the post was collected under.
    pub hashtag: String,
    /// Lifecycle status.
    pub status: UgcStatus,
    /// 0-100 shareability rating, assigned by curation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virality_score: Option<u8>,
}
