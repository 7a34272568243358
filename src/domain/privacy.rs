use serde::{Deserialize, Serialize};

/// Local storage key for the privacy toggles.
pub const PRIVACY_STORAGE_KEY: &str = "privacy_settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrivacySetting {
    DataRetention,
    ProfileVisibility,
    MatchingOptIn,
    AnalyticsOptIn,
    MarketingEmails,
}

impl PrivacySetting {
    pub const ALL: [PrivacySetting; 5] = [
        PrivacySetting::DataRetention,
        PrivacySetting::ProfileVisibility,
        PrivacySetting::MatchingOptIn,
        PrivacySetting::AnalyticsOptIn,
        PrivacySetting::MarketingEmails,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PrivacySetting::DataRetention => "Data Retention",
            PrivacySetting::ProfileVisibility => "Profile Visibility",
            PrivacySetting::MatchingOptIn => "Matching Algorithm",
            PrivacySetting::AnalyticsOptIn => "Usage Analytics",
            PrivacySetting::MarketingEmails => "Marketing Communications",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PrivacySetting::DataRetention => "Allow AXIVAI to store your evaluation data for dashboard access and analytics. When disabled, data is deleted after 24 hours.",
            PrivacySetting::ProfileVisibility => "Allow your profile to be visible to potential matches in the investor/startup matching system.",
            PrivacySetting::MatchingOptIn => "Participate in AI-powered matching between startups and investors. Your data helps improve match quality.",
            PrivacySetting::AnalyticsOptIn => "Allow anonymous usage data collection to help improve AXIVAI platform features and performance.",
            PrivacySetting::MarketingEmails => "Receive emails about new features, industry insights, and platform updates.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub data_retention: bool,
    pub profile_visibility: bool,
    pub matching_opt_in: bool,
    pub analytics_opt_in: bool,
    pub marketing_emails: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            data_retention: false,
            profile_visibility: true,
            matching_opt_in: true,
            analytics_opt_in: false,
            marketing_emails: false,
        }
    }
}

impl PrivacySettings {
    pub fn get(&self, setting: PrivacySetting) -> bool {
        match setting {
            PrivacySetting::DataRetention => self.data_retention,
            PrivacySetting::ProfileVisibility => self.profile_visibility,
            PrivacySetting::MatchingOptIn => self.matching_opt_in,
            PrivacySetting::AnalyticsOptIn => self.analytics_opt_in,
            PrivacySetting::MarketingEmails => self.marketing_emails,
        }
    }

    pub fn toggle(&mut self, setting: PrivacySetting) -> bool {
        let slot = match setting {
            PrivacySetting::DataRetention => &mut self.data_retention,
            PrivacySetting::ProfileVisibility => &mut self.profile_visibility,
            PrivacySetting::MatchingOptIn => &mut self.matching_opt_in,
            PrivacySetting::AnalyticsOptIn => &mut self.analytics_opt_in,
            PrivacySetting::MarketingEmails => &mut self.marketing_emails,
        };
        *slot = !*slot;
        *slot
    }

    pub fn retention_status(&self) -> &'static str {
        if self.data_retention {
            "Your evaluation data is retained for dashboard access and analytics."
        } else {
            "Privacy mode: evaluation data is deleted within 24 hours of processing."
        }
    }
}

/// Regulations shown in the compliance panel.
pub const COMPLIANCE_FRAMEWORKS: [(&str, &str); 4] = [
    ("GDPR", "EU General Data Protection Regulation"),
    ("CCPA", "California Consumer Privacy Act"),
    ("DIFC DP Law", "Dubai International Financial Centre Data Protection"),
    ("EU AI Act", "Transparency and explainability for AI decisions"),
];

pub const EXPORT_CONTENTS: [&str; 4] = [
    "All evaluation results and reports",
    "Account settings and preferences",
    "Activity history and usage data",
    "Matching and interaction history",
];

pub const DELETION_CONTENTS: [&str; 4] = [
    "All evaluation data and reports",
    "Your profile and preferences",
    "Matching history and connections",
    "All account data within 30 days",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_privacy() {
        let settings = PrivacySettings::default();
        assert!(!settings.get(PrivacySetting::DataRetention));
        assert!(settings.get(PrivacySetting::ProfileVisibility));
        assert!(settings.get(PrivacySetting::MatchingOptIn));
        assert!(!settings.get(PrivacySetting::AnalyticsOptIn));
        assert!(!settings.get(PrivacySetting::MarketingEmails));
    }

    #[test]
    fn toggle_flips_only_one_setting() {
        let mut settings = PrivacySettings::default();
        assert!(settings.toggle(PrivacySetting::DataRetention));
        assert!(settings.data_retention);
        assert!(settings.retention_status().contains("retained"));
        assert_eq!(
            PrivacySettings {
                data_retention: false,
                ..settings.clone()
            },
            PrivacySettings::default()
        );
    }

    #[test]
    fn stored_form_uses_camel_case_keys() {
        let json = serde_json::to_value(PrivacySettings::default()).unwrap();
        assert_eq!(json["dataRetention"], false);
        assert_eq!(json["matchingOptIn"], true);
    }
}
