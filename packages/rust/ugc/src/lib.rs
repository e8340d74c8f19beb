//! User-generated-content collection, curation, and spotlighting.
//!
//! Collection stands in for social-media API reads, curation for an LLM
//! brand-safety/virality analysis, and spotlighting for an external
//! re-publish of the best community post. All three narrate their work and
//! operate on deterministic sample submissions.

mod collector;
mod curator;
mod spotlight;

pub use collector::collect_ugc;
pub use curator::{
    CURATED_SCORE, CurationReport, REJECTED_SCORE, curate_submissions,
    fetch_pending_submissions, score_submission,
};
pub use spotlight::{SpotlightPost, fetch_curated_submission, spotlight_submission};
