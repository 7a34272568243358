use serde::{Deserialize, Serialize};

/// Scores strictly above this are a `Validate`.
pub const VALIDATE_THRESHOLD: f64 = 0.8;
/// Scores strictly above this (and not above [`VALIDATE_THRESHOLD`]) are `Conditional`.
pub const CONDITIONAL_THRESHOLD: f64 = 0.6;

/// Closed set of evaluation outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Validate,
    Conditional,
    Pivot,
    Invalid,
}

impl Verdict {
    /// Cosmetic mapping used when scores are fabricated locally. `Invalid` is
    /// never produced here; only the server hands it out.
    pub fn from_score(score: f64) -> Self {
        if score > VALIDATE_THRESHOLD {
            Verdict::Validate
        } else if score > CONDITIONAL_THRESHOLD {
            Verdict::Conditional
        } else {
            Verdict::Pivot
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Validate => "validate",
            Verdict::Conditional => "conditional",
            Verdict::Pivot => "pivot",
            Verdict::Invalid => "invalid",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Verdict::Validate => "✅",
            Verdict::Conditional => "⚠️",
            Verdict::Pivot => "🔁",
            Verdict::Invalid => "❌",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Verdict::Validate => "Validate",
            Verdict::Conditional => "Conditional",
            Verdict::Pivot => "Pivot",
            Verdict::Invalid => "Invalid",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Verdict::Validate => "Strong potential - proceed with development and funding",
            Verdict::Conditional => {
                "Promising but needs addressing key concerns before proceeding"
            }
            Verdict::Pivot => "Consider significant changes to business model or approach",
            Verdict::Invalid => "High risk - fundamental issues need resolution",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a fraction in [0,1] as a rounded percentage label.
pub fn percent_label(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive_at_the_boundaries() {
        assert_eq!(Verdict::from_score(0.80), Verdict::Conditional);
        assert_eq!(Verdict::from_score(0.800_000_01), Verdict::Validate);
        assert_eq!(Verdict::from_score(0.60), Verdict::Pivot);
        assert_eq!(Verdict::from_score(0.600_000_01), Verdict::Conditional);
    }

    #[test]
    fn low_scores_pivot() {
        assert_eq!(Verdict::from_score(0.0), Verdict::Pivot);
        assert_eq!(Verdict::from_score(0.45), Verdict::Pivot);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Verdict::Conditional).unwrap();
        assert_eq!(json, "\"conditional\"");
        let parsed: Verdict = serde_json::from_str("\"invalid\"").unwrap();
        assert_eq!(parsed, Verdict::Invalid);
    }

    #[test]
    fn percent_label_rounds() {
        assert_eq!(percent_label(0.784), "78%");
        assert_eq!(percent_label(0.785), "79%");
        assert_eq!(percent_label(1.0), "100%");
    }
}
