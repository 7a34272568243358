//! Matching hub listings. Match scores come from the platform; the entries
//! here are the demo listings shown until a matching endpoint exists.

use super::evaluation::LifecycleStage;

#[derive(Clone, Debug, PartialEq)]
pub struct StartupMatch {
    pub id: String,
    pub name: String,
    pub description: String,
    pub stage: LifecycleStage,
    pub domain: String,
    pub location: String,
    pub match_score: f64,
    pub valuation: String,
    pub highlights: Vec<String>,
    pub bookmarked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InvestorMatch {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub focus_stages: Vec<LifecycleStage>,
    pub domains: Vec<String>,
    pub typical_check: String,
    pub portfolio_count: u32,
    pub match_score: f64,
    pub bookmarked: bool,
}

impl InvestorMatch {
    pub fn focus_label(&self) -> String {
        self.focus_stages
            .iter()
            .map(LifecycleStage::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchTab {
    #[default]
    Matches,
    Bookmarked,
    RecentActivity,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchFilter {
    pub stage: Option<LifecycleStage>,
    pub domain: String,
    pub location: String,
    /// Zero to five stars; each star is 20 percentage points.
    pub min_stars: u8,
}

impl MatchFilter {
    pub fn min_score(&self) -> f64 {
        f64::from(self.min_stars.min(5)) * 20.0 / 100.0
    }

    pub fn accepts_startup(&self, startup: &StartupMatch) -> bool {
        self.stage.map_or(true, |stage| startup.stage == stage)
            && contains_ci(&startup.domain, &self.domain)
            && contains_ci(&startup.location, &self.location)
            && startup.match_score >= self.min_score()
    }

    /// Investors carry no location, so that filter is ignored for them.
    pub fn accepts_investor(&self, investor: &InvestorMatch) -> bool {
        self.stage
            .map_or(true, |stage| investor.focus_stages.contains(&stage))
            && (self.domain.trim().is_empty()
                || investor
                    .domains
                    .iter()
                    .any(|domain| contains_ci(domain, &self.domain)))
            && investor.match_score >= self.min_score()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Flips the bookmark flag of the entry with `id`. Returns the new state.
pub fn toggle_startup_bookmark(entries: &mut [StartupMatch], id: &str) -> Option<bool> {
    entries.iter_mut().find(|entry| entry.id == id).map(|entry| {
        entry.bookmarked = !entry.bookmarked;
        entry.bookmarked
    })
}

pub fn toggle_investor_bookmark(entries: &mut [InvestorMatch], id: &str) -> Option<bool> {
    entries.iter_mut().find(|entry| entry.id == id).map(|entry| {
        entry.bookmarked = !entry.bookmarked;
        entry.bookmarked
    })
}

pub fn demo_startups() -> Vec<StartupMatch> {
    vec![
        StartupMatch {
            id: "1".into(),
            name: "TechFlow AI".into(),
            description: "AI-powered workflow automation for enterprises".into(),
            stage: LifecycleStage(3),
            domain: "Enterprise SaaS".into(),
            location: "San Francisco, CA".into(),
            match_score: 0.92,
            valuation: "$15M".into(),
            highlights: vec![
                "Strong product-market fit".into(),
                "Experienced team".into(),
                "Growing revenue".into(),
            ],
            bookmarked: false,
        },
        StartupMatch {
            id: "2".into(),
            name: "GreenLogistics".into(),
            description: "Sustainable supply chain optimization platform".into(),
            stage: LifecycleStage(4),
            domain: "Supply Chain".into(),
            location: "Austin, TX".into(),
            match_score: 0.87,
            valuation: "$30M".into(),
            highlights: vec![
                "ESG focus".into(),
                "Proven traction".into(),
                "Strong partnerships".into(),
            ],
            bookmarked: true,
        },
        StartupMatch {
            id: "3".into(),
            name: "HealthConnect".into(),
            description: "Telemedicine platform for rural healthcare".into(),
            stage: LifecycleStage(2),
            domain: "HealthTech".into(),
            location: "Denver, CO".into(),
            match_score: 0.81,
            valuation: "$8M".into(),
            highlights: vec![
                "Social impact".into(),
                "Government partnerships".into(),
                "Growing market".into(),
            ],
            bookmarked: false,
        },
    ]
}

pub fn demo_investors() -> Vec<InvestorMatch> {
    vec![
        InvestorMatch {
            id: "1".into(),
            name: "Nexus Ventures".into(),
            kind: "VC".into(),
            focus_stages: vec![LifecycleStage(3), LifecycleStage(4), LifecycleStage(5)],
            domains: vec!["Enterprise SaaS".into(), "AI/ML".into()],
            typical_check: "$2M - $10M".into(),
            portfolio_count: 45,
            match_score: 0.89,
            bookmarked: false,
        },
        InvestorMatch {
            id: "2".into(),
            name: "Green Capital Partners".into(),
            kind: "Impact VC".into(),
            focus_stages: vec![LifecycleStage(3), LifecycleStage(4)],
            domains: vec!["CleanTech".into(), "Supply Chain".into()],
            typical_check: "$5M - $15M".into(),
            portfolio_count: 32,
            match_score: 0.84,
            bookmarked: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_accepts_everything() {
        let filter = MatchFilter::default();
        assert!(demo_startups().iter().all(|s| filter.accepts_startup(s)));
        assert!(demo_investors().iter().all(|i| filter.accepts_investor(i)));
    }

    #[test]
    fn startup_filters_combine() {
        let filter = MatchFilter {
            stage: Some(LifecycleStage(4)),
            domain: "supply".into(),
            location: "austin".into(),
            min_stars: 0,
        };
        let names: Vec<_> = demo_startups()
            .into_iter()
            .filter(|s| filter.accepts_startup(s))
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["GreenLogistics"]);
    }

    #[test]
    fn min_stars_maps_to_score() {
        let filter = MatchFilter {
            min_stars: 5,
            ..MatchFilter::default()
        };
        assert!((filter.min_score() - 1.0).abs() < f64::EPSILON);
        assert!(demo_startups().iter().all(|s| !filter.accepts_startup(s)));

        let filter = MatchFilter {
            min_stars: 9,
            ..MatchFilter::default()
        };
        assert!((filter.min_score() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn investor_stage_filter_uses_focus_stages() {
        let filter = MatchFilter {
            stage: Some(LifecycleStage(5)),
            ..MatchFilter::default()
        };
        let names: Vec<_> = demo_investors()
            .into_iter()
            .filter(|i| filter.accepts_investor(i))
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Nexus Ventures"]);
    }

    #[test]
    fn bookmark_toggles_by_id() {
        let mut startups = demo_startups();
        assert_eq!(toggle_startup_bookmark(&mut startups, "1"), Some(true));
        assert_eq!(toggle_startup_bookmark(&mut startups, "1"), Some(false));
        assert_eq!(toggle_startup_bookmark(&mut startups, "missing"), None);

        let mut investors = demo_investors();
        assert_eq!(toggle_investor_bookmark(&mut investors, "2"), Some(false));
    }

    #[test]
    fn focus_label_lists_stage_names() {
        let investor = &demo_investors()[1];
        assert_eq!(investor.focus_label(), "Early Traction, Growth");
    }
}
