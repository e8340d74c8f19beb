//! Funnel analytics and keyword-priority self-optimization.
//!
//! The snapshot stands in for a product-analytics funnel query and the
//! adjustment pass for an LLM reading of that data. The adjustment rule is
//! deliberately simple: a pattern's new priority is its rank by observed
//! conversion rate, and its recorded average rate drifts up by a fixed
//! uplift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use growthloop_shared::KeywordPattern;

/// Uplift applied to each observed conversion rate when recording it as the
/// pattern's new average.
const CONVERSION_RATE_UPLIFT: f64 = 0.005;

/// Observed performance of one keyword pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordPerformance {
    /// The long-tail pattern the page was generated for.
    pub pattern: String,
    /// Page-view to signup conversion rate for this pattern's page.
    pub conversion_rate: f64,
    /// Priority currently recorded on the pattern.
    pub current_priority: i64,
}

/// A funnel-analytics snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStats {
    /// Overall page-view to signup conversion rate.
    pub page_view_to_signup_rate: f64,
    /// Per-pattern performance rows.
    pub keyword_performance: Vec<KeywordPerformance>,
    /// When the snapshot was taken.
    pub captured_at: DateTime<Utc>,
}

/// A priority/rate adjustment for one keyword pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAdjustment {
    /// The pattern being adjusted.
    pub pattern: String,
    /// New priority (higher is better).
    pub new_priority: i64,
    /// New recorded average conversion rate.
    pub new_avg_conversion_rate: f64,
}

/// Query the funnel-analytics snapshot.
///
/// The analytics backend is not wired up; the fixed sample funnel is
/// returned, as a real conversion-funnel query would be.
pub fn query_analytics() -> FunnelStats {
    info!("simulating funnel-analytics query");

    let row = |pattern: &str, conversion_rate| KeywordPerformance {
        pattern: pattern.into(),
        conversion_rate,
        current_priority: 1,
    };

    FunnelStats {
        page_view_to_signup_rate: 0.05,
        keyword_performance: vec![
            row("AI assistant vs human assistant", 0.06),
            row("alternative to AI assistant", 0.04),
            row("AI assistant for customer service", 0.07),
        ],
        captured_at: Utc::now(),
    }
}

/// Compute priority adjustments from a funnel snapshot.
///
/// Stands in for LLM analysis of the data. Each pattern's new priority is
/// its 1-based rank by conversion rate (best performer gets the highest
/// number), and its new average rate is the observed rate plus
/// [`CONVERSION_RATE_UPLIFT`]. Output order follows the snapshot.
#[instrument(skip_all, fields(patterns = stats.keyword_performance.len()))]
pub fn optimize_keyword_priorities(stats: &FunnelStats) -> Vec<KeywordAdjustment> {
    info!(
        funnel_rate = stats.page_view_to_signup_rate,
        "simulating LLM self-optimization of keyword priorities"
    );

    stats
        .keyword_performance
        .iter()
        .map(|row| KeywordAdjustment {
            pattern: row.pattern.clone(),
            new_priority: rank_by_rate(stats, row.conversion_rate),
            new_avg_conversion_rate: row.conversion_rate + CONVERSION_RATE_UPLIFT,
        })
        .collect()
}

/// Apply an adjustment to a keyword pattern record, as the simulated store
/// update would.
pub fn apply_adjustment(pattern: &mut KeywordPattern, adjustment: &KeywordAdjustment) {
    pattern.priority = adjustment.new_priority;
    pattern.avg_conversion_rate = Some(adjustment.new_avg_conversion_rate);
}

/// 1-based rank of a conversion rate within the snapshot (ascending), i.e.
/// one plus the number of rows performing strictly worse.
fn rank_by_rate(stats: &FunnelStats, rate: f64) -> i64 {
    let worse = stats
        .keyword_performance
        .iter()
        .filter(|row| row.conversion_rate < rate)
        .count();
    worse as i64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn snapshot_sample_values() {
        let stats = query_analytics();
        assert!(close(stats.page_view_to_signup_rate, 0.05));
        assert_eq!(stats.keyword_performance.len(), 3);

        let rates: Vec<f64> = stats
            .keyword_performance
            .iter()
            .map(|row| row.conversion_rate)
            .collect();
        assert!(close(rates[0], 0.06));
        assert!(close(rates[1], 0.04));
        assert!(close(rates[2], 0.07));

        for row in &stats.keyword_performance {
            assert_eq!(row.current_priority, 1);
        }
    }

    #[test]
    fn adjustments_rank_sample_patterns() {
        let adjustments = optimize_keyword_priorities(&query_analytics());

        let view: Vec<(&str, i64)> = adjustments
            .iter()
            .map(|adj| (adj.pattern.as_str(), adj.new_priority))
            .collect();
        assert_eq!(
            view,
            vec![
                ("AI assistant vs human assistant", 2),
                ("alternative to AI assistant", 1),
                ("AI assistant for customer service", 3),
            ]
        );
    }

    #[test]
    fn adjustments_apply_rate_uplift() {
        let adjustments = optimize_keyword_priorities(&query_analytics());

        assert!(close(adjustments[0].new_avg_conversion_rate, 0.065));
        assert!(close(adjustments[1].new_avg_conversion_rate, 0.045));
        assert!(close(adjustments[2].new_avg_conversion_rate, 0.075));
    }

    #[test]
    fn ranking_handles_arbitrary_snapshots() {
        let stats = FunnelStats {
            page_view_to_signup_rate: 0.1,
            keyword_performance: vec![
                KeywordPerformance {
                    pattern: "a".into(),
                    conversion_rate: 0.2,
                    current_priority: 1,
                },
                KeywordPerformance {
                    pattern: "b".into(),
                    conversion_rate: 0.01,
                    current_priority: 5,
                },
            ],
            captured_at: Utc::now(),
        };

        let adjustments = optimize_keyword_priorities(&stats);
        assert_eq!(adjustments[0].new_priority, 2);
        assert_eq!(adjustments[1].new_priority, 1);
    }

    #[test]
    fn adjustment_updates_pattern_record() {
        use growthloop_shared::KeywordStatus;

        let mut pattern = KeywordPattern {
            id: Some(1),
            pattern: "AI assistant vs human assistant".into(),
            head_term: "AI assistant".into(),
            status: KeywordStatus::Published,
            priority: 1,
            avg_conversion_rate: None,
            url: None,
        };

        let adjustments = optimize_keyword_priorities(&query_analytics());
        apply_adjustment(&mut pattern, &adjustments[0]);

        assert_eq!(pattern.priority, 2);
        assert!(close(pattern.avg_conversion_rate.unwrap(), 0.065));
        // Lifecycle fields are untouched.
        assert_eq!(pattern.status, KeywordStatus::Published);
    }

    #[test]
    fn empty_snapshot_yields_no_adjustments() {
        let stats = FunnelStats {
            page_view_to_signup_rate: 0.0,
            keyword_performance: vec![],
            captured_at: Utc::now(),
        };
        assert!(optimize_keyword_priorities(&stats).is_empty());
    }
}
