//! UGC collection (simulated social-media API reads).

use growthloop_shared::{GrowthLoopError, Result, UgcStatus, UgcSubmission};
use tracing::{info, instrument};

/// Collect user-generated content mentioning a campaign hashtag.
///
/// Stands in for Twitter/Instagram API searches; returns the fixed sample
/// posts with the `hashtag` field set from the argument. The hashtag must
/// start with `#` and contain no whitespace.
#[instrument]
pub fn collect_ugc(hashtag: &str) -> Result<Vec<UgcSubmission>> {
    validate_hashtag(hashtag)?;

    info!(hashtag, "simulating UGC collection from social platforms");

    let collected = vec![
        UgcSubmission {
            id: None,
            post_content: "Loving this new web app! #MyWebAppCreation".into(),
            platform: "Twitter".into(),
            hashtag: hashtag.to_string(),
            status: UgcStatus::Pending,
            virality_score: None,
        },
        UgcSubmission {
            id: None,
            post_content: "Just built something amazing! #MyWebAppCreation".into(),
            platform: "Instagram".into(),
            hashtag: hashtag.to_string(),
            status: UgcStatus::Pending,
            virality_score: None,
        },
    ];

    Ok(collected)
}

/// Require a `#`-prefixed, whitespace-free, non-empty tag.
fn validate_hashtag(hashtag: &str) -> Result<()> {
    let Some(tag) = hashtag.strip_prefix('#') else {
        return Err(GrowthLoopError::validation(format!(
            "hashtag '{hashtag}' must start with '#'"
        )));
    };

    if tag.is_empty() || tag.chars().any(char::is_whitespace) {
        return Err(GrowthLoopError::validation(format!(
            "hashtag '{hashtag}' must be a single non-empty tag"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_the_two_sample_posts() {
        let posts = collect_ugc("#MyWebAppCreation").expect("collect");
        assert_eq!(posts.len(), 2);

        assert_eq!(posts[0].platform, "Twitter");
        assert_eq!(posts[0].post_content, "Loving this new web app! #MyWebAppCreation");
        assert_eq!(posts[1].platform, "Instagram");
        assert_eq!(posts[1].post_content, "Just built something amazing! #MyWebAppCreation");
    }

    #[test]
    fn collected_posts_start_pending_and_unscored() {
        let posts = collect_ugc("#MyWebAppCreation").expect("collect");
        for post in &posts {
            assert_eq!(post.id, None);
            assert_eq!(post.status, UgcStatus::Pending);
            assert_eq!(post.virality_score, None);
        }
    }

    #[test]
    fn hashtag_argument_is_recorded_on_each_submission() {
        let posts = collect_ugc("#LaunchWeek").expect("collect");
        for post in &posts {
            assert_eq!(post.hashtag, "#LaunchWeek");
        }
    }

    #[test]
    fn malformed_hashtags_are_rejected() {
        assert!(collect_ugc("MyWebAppCreation").is_err());
        assert!(collect_ugc("#").is_err());
        assert!(collect_ugc("# spaced out").is_err());

        let err = collect_ugc("nope").unwrap_err();
        assert!(err.to_string().contains("must start with '#'"));
    }
}
