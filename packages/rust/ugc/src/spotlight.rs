//! Community spotlight: re-publishing the best curated post.
//!
//! Turns one `Curated` submission into a spotlight article and moves it to
//! `Spotlighted` so it is not picked up again. Writing the article stands in
//! for an LLM call; the external publish is narrated by the CLI.

use growthloop_shared::{GrowthLoopError, Result, UgcStatus, UgcSubmission};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A community-spotlight article built from a curated submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotlightPost {
    /// Article title.
    pub title: String,
    /// Article body as HTML.
    pub html: String,
}

/// Return the next `Curated` submission awaiting a spotlight.
///
/// The backing store is not wired up; the fixed curated sample is returned.
pub fn fetch_curated_submission() -> UgcSubmission {
    info!("simulating retrieval of a curated UGC submission from the store");

    UgcSubmission {
        id: Some(1),
        post_content: "Loving this new web app! #MyWebAppCreation".into(),
        platform: "Twitter".into(),
        hashtag: "#MyWebAppCreation".into(),
        status: UgcStatus::Curated,
        virality_score: Some(85),
    }
}

/// Build a spotlight post from a curated submission.
///
/// Only `Curated` submissions qualify. Returns the post and the submission
/// moved to `Spotlighted`.
#[instrument(skip(submission), fields(id = ?submission.id))]
pub fn spotlight_submission(
    submission: &UgcSubmission,
) -> Result<(SpotlightPost, UgcSubmission)> {
    if submission.status != UgcStatus::Curated {
        return Err(GrowthLoopError::validation(format!(
            "only Curated submissions can be spotlighted (got {})",
            submission.status
        )));
    }

    info!(platform = %submission.platform, "simulating LLM spotlight-post writing");

    let title = format!("Community Spotlight: a {} favorite", submission.platform);
    let html = format!(
        "<h1>{title}</h1>\n\
         <p>We're thrilled to highlight an amazing contribution shared on {platform}.</p>\n\
         <p>Here's what they shared: \"{content}\"</p>\n\
         <p>Join us in celebrating their insights and contributions to our growth journey!</p>",
        platform = submission.platform,
        content = submission.post_content,
    );

    let mut spotlighted = submission.clone();
    spotlighted.status = UgcStatus::Spotlighted;

    Ok((SpotlightPost { title, html }, spotlighted))
}
