use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::evaluation::SubmittedEvaluation;
use super::verdict::Verdict;

/// Free-tier monthly report allowance.
pub const FREE_TIER_MONTHLY_REPORTS: u32 = 3;
/// The usage banner appears once this many free reports are used.
pub const USAGE_WARNING_AT: u32 = 2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentEvaluation {
    pub id: String,
    pub company_name: String,
    pub verdict: Verdict,
    pub score: f64,
    #[serde(default)]
    pub timestamp: String,
}

impl RecentEvaluation {
    /// Company name cut to ten characters for chart labels.
    pub fn short_name(&self) -> String {
        self.company_name.chars().take(10).collect()
    }

    /// Calendar date of the timestamp, or the raw text when it does not parse.
    pub fn date_label(&self) -> String {
        OffsetDateTime::parse(&self.timestamp, &Rfc3339)
            .map(|ts| ts.date().to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageStats {
    #[serde(default)]
    pub reports_this_month: u32,
    #[serde(default = "default_tier")]
    pub tier: String,
}

fn default_tier() -> String {
    "free".to_string()
}

impl Default for UsageStats {
    fn default() -> Self {
        Self {
            reports_this_month: 0,
            tier: default_tier(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub evaluations_count: u32,
    #[serde(default)]
    pub recent_evaluations: Vec<RecentEvaluation>,
    #[serde(default)]
    pub usage_stats: UsageStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportsLeft {
    Limited(u32),
    Unlimited,
}

impl std::fmt::Display for ReportsLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportsLeft::Limited(count) => write!(f, "{count}"),
            ReportsLeft::Unlimited => f.write_str("∞"),
        }
    }
}

impl UsageStats {
    pub fn is_free(&self) -> bool {
        self.tier.eq_ignore_ascii_case("free")
    }

    pub fn reports_left(&self) -> ReportsLeft {
        if self.is_free() {
            ReportsLeft::Limited(FREE_TIER_MONTHLY_REPORTS.saturating_sub(self.reports_this_month))
        } else {
            ReportsLeft::Unlimited
        }
    }

    pub fn show_usage_warning(&self) -> bool {
        self.is_free() && self.reports_this_month >= USAGE_WARNING_AT
    }

    pub fn tier_label(&self) -> String {
        self.tier.to_uppercase()
    }
}

impl DashboardData {
    /// Dashboard assembled from evaluations submitted in this session, used
    /// when the dashboard call itself is unavailable.
    pub fn from_session(submitted: &[SubmittedEvaluation], tier: &str) -> Self {
        let recent_evaluations = submitted
            .iter()
            .rev()
            .map(|entry| RecentEvaluation {
                id: entry.result.evaluation_id.clone(),
                company_name: entry.company_name.clone(),
                verdict: entry.result.verdict,
                score: entry.result.overall_score,
                timestamp: entry.result.timestamp.clone(),
            })
            .collect::<Vec<_>>();
        let count = recent_evaluations.len() as u32;

        Self {
            evaluations_count: count,
            recent_evaluations,
            usage_stats: UsageStats {
                reports_this_month: count,
                tier: tier.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::evaluation::EvaluationResult;

    fn usage(reports: u32, tier: &str) -> UsageStats {
        UsageStats {
            reports_this_month: reports,
            tier: tier.to_string(),
        }
    }

    #[test]
    fn free_tier_counts_down_and_saturates() {
        assert_eq!(usage(0, "free").reports_left(), ReportsLeft::Limited(3));
        assert_eq!(usage(1, "free").reports_left(), ReportsLeft::Limited(2));
        assert_eq!(usage(7, "free").reports_left(), ReportsLeft::Limited(0));
        assert_eq!(usage(7, "pro").reports_left(), ReportsLeft::Unlimited);
        assert_eq!(ReportsLeft::Unlimited.to_string(), "∞");
    }

    #[test]
    fn warning_only_for_free_tier_near_limit() {
        assert!(!usage(1, "free").show_usage_warning());
        assert!(usage(2, "free").show_usage_warning());
        assert!(usage(3, "FREE").show_usage_warning());
        assert!(!usage(5, "enterprise").show_usage_warning());
    }

    #[test]
    fn parses_server_payload() {
        let raw = serde_json::json!({
            "evaluations_count": 3,
            "recent_evaluations": [{
                "id": "1",
                "company_name": "TechFlow AI",
                "verdict": "validate",
                "score": 0.82,
                "timestamp": "2025-06-08T10:30:00Z"
            }],
            "usage_stats": {"reports_this_month": 1, "tier": "free"}
        });
        let data: DashboardData = serde_json::from_value(raw).unwrap();
        assert_eq!(data.evaluations_count, 3);
        assert_eq!(data.recent_evaluations[0].verdict, Verdict::Validate);
        assert_eq!(data.usage_stats.reports_left(), ReportsLeft::Limited(2));
        assert_eq!(data.recent_evaluations[0].short_name(), "TechFlow A");
        assert_eq!(data.recent_evaluations[0].date_label(), "2025-06-08");
    }

    #[test]
    fn session_dashboard_lists_newest_first() {
        let entry = |name: &str, id: &str, score: f64| SubmittedEvaluation {
            company_name: name.to_string(),
            result: EvaluationResult {
                evaluation_id: id.to_string(),
                verdict: Verdict::from_score(score),
                overall_score: score,
                agent_scores: BTreeMap::new(),
                detailed_scores: Vec::new(),
                explanation: String::new(),
                recommendations: Vec::new(),
                timestamp: String::new(),
            },
        };
        let history = vec![entry("First", "a", 0.9), entry("Second", "b", 0.7)];

        let data = DashboardData::from_session(&history, "free");
        assert_eq!(data.evaluations_count, 2);
        assert_eq!(data.recent_evaluations[0].company_name, "Second");
        assert_eq!(data.recent_evaluations[0].verdict, Verdict::Conditional);
        assert!(data.usage_stats.show_usage_warning());
    }
}
