//! UGC curation: brand-safety review and virality scoring.
//!
//! The scoring branch below stands in for an LLM analysis of each post.
//! Posts mentioning the flagged term fail review; everything else passes
//! with a fixed high score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use growthloop_shared::{UgcStatus, UgcSubmission};

/// Term that fails brand-safety review (matched case-insensitively).
const FLAGGED_TERM: &str = "terrible";

/// Virality score assigned to rejected submissions.
pub const REJECTED_SCORE: u8 = 10;

/// Virality score assigned to curated submissions.
pub const CURATED_SCORE: u8 = 85;

/// Stats for one curation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationReport {
    /// Submissions examined.
    pub reviewed: usize,
    /// Submissions that passed review.
    pub curated: usize,
    /// Submissions that failed review.
    pub rejected: usize,
    /// When the pass finished.
    pub completed_at: DateTime<Utc>,
}

/// Return the pending UGC submissions awaiting curation.
///
/// The backing store is not wired up; the fixed sample batch is returned, as
/// a real read of `Pending` submissions would.
pub fn fetch_pending_submissions() -> Vec<UgcSubmission> {
    info!("simulating retrieval of pending UGC submissions from the store");

    let sample = |id, post_content: &str, platform: &str| UgcSubmission {
        id: Some(id),
        post_content: post_content.into(),
        platform: platform.into(),
        hashtag: "#MyWebAppCreation".into(),
        status: UgcStatus::Pending,
        virality_score: None,
    };

    vec![
        sample(1, "Loving this new web app! #MyWebAppCreation", "Twitter"),
        sample(2, "Just built something amazing! #MyWebAppCreation", "Instagram"),
        sample(
            3,
            "This app is terrible. Don't use it. #MyWebAppCreation",
            "Twitter",
        ),
    ]
}

/// Score one submission for brand safety and shareability.
///
/// Returns the virality score and the status the submission should move to.
pub fn score_submission(submission: &UgcSubmission) -> (u8, UgcStatus) {
    if submission.post_content.to_lowercase().contains(FLAGGED_TERM) {
        (REJECTED_SCORE, UgcStatus::Rejected)
    } else {
        (CURATED_SCORE, UgcStatus::Curated)
    }
}

/// Run a curation pass over a batch of submissions.
///
/// Every submission gets a virality score and moves to `Curated` or
/// `Rejected`; the report summarizes the pass.
#[instrument(skip_all, fields(batch = submissions.len()))]
pub fn curate_submissions(
    submissions: Vec<UgcSubmission>,
) -> (Vec<UgcSubmission>, CurationReport) {
    let reviewed = submissions.len();
    let mut curated = 0;
    let mut rejected = 0;

    let processed: Vec<UgcSubmission> = submissions
        .into_iter()
        .map(|mut submission| {
            let (score, status) = score_submission(&submission);
            info!(
                id = ?submission.id,
                platform = %submission.platform,
                score,
                status = %status,
                "simulating LLM brand-safety analysis"
            );

            match status {
                UgcStatus::Curated => curated += 1,
                UgcStatus::Rejected => rejected += 1,
                _ => {}
            }

            submission.virality_score = Some(score);
            submission.status = status;
            submission
        })
        .collect();

    let report = CurationReport {
        reviewed,
        curated,
        rejected,
        completed_at: Utc::now(),
    };

    (processed, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(content: &str) -> UgcSubmission {
        UgcSubmission {
            id: Some(1),
            post_content: content.into(),
            platform: "Twitter".into(),
            hashtag: "#MyWebAppCreation".into(),
            status: UgcStatus::Pending,
            virality_score: None,
        }
    }

    #[test]
    fn flagged_term_rejects_with_low_score() {
        let sub = submission("This app is terrible. Don't use it. #MyWebAppCreation");
        assert_eq!(score_submission(&sub), (REJECTED_SCORE, UgcStatus::Rejected));
    }

    #[test]
    fn clean_content_curates_with_high_score() {
        let sub = submission("Loving this new web app! #MyWebAppCreation");
        assert_eq!(score_submission(&sub), (CURATED_SCORE, UgcStatus::Curated));
    }

    #[test]
    fn flagged_term_matches_case_insensitively() {
        let sub = submission("TERRIBLE experience, avoid. #MyWebAppCreation");
        assert_eq!(score_submission(&sub), (REJECTED_SCORE, UgcStatus::Rejected));
    }

    #[test]
    fn curation_pass_over_sample_batch() {
        let (processed, report) = curate_submissions(fetch_pending_submissions());

        assert_eq!(report.reviewed, 3);
        assert_eq!(report.curated, 2);
        assert_eq!(report.rejected, 1);

        assert_eq!(processed[0].status, UgcStatus::Curated);
        assert_eq!(processed[0].virality_score, Some(CURATED_SCORE));
        assert_eq!(processed[1].status, UgcStatus::Curated);
        assert_eq!(processed[2].status, UgcStatus::Rejected);
        assert_eq!(processed[2].virality_score, Some(REJECTED_SCORE));

        // Identity fields survive the pass.
        let ids: Vec<Option<i64>> = processed.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn empty_batch_reports_zero() {
        let (processed, report) = curate_submissions(Vec::new());
        assert!(processed.is_empty());
        assert_eq!(report.reviewed, 0);
        assert_eq!(report.curated, 0);
        assert_eq!(report.rejected, 0);
    }
}
