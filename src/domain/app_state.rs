use super::{
    evaluation::{EvaluationResult, SubmittedEvaluation},
    matching::{demo_investors, demo_startups, InvestorMatch, StartupMatch},
    privacy::PrivacySettings,
    session::{Session, UserType},
};

/// In-memory UI state for the running session.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub session: Session,
    /// Evaluations submitted during this session, oldest first.
    pub submitted: Vec<SubmittedEvaluation>,
    pub startup_matches: Vec<StartupMatch>,
    pub investor_matches: Vec<InvestorMatch>,
    pub privacy: PrivacySettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            submitted: Vec::new(),
            startup_matches: demo_startups(),
            investor_matches: demo_investors(),
            privacy: PrivacySettings::default(),
        }
    }
}

impl AppState {
    pub fn record_result(&mut self, company_name: String, result: EvaluationResult) {
        self.submitted.push(SubmittedEvaluation {
            company_name,
            result,
        });
    }

    pub fn find_result(&self, evaluation_id: &str) -> Option<&SubmittedEvaluation> {
        self.submitted
            .iter()
            .rev()
            .find(|entry| entry.result.evaluation_id == evaluation_id)
    }

    pub fn user_type(&self) -> UserType {
        self.session
            .user
            .as_ref()
            .map(|user| user.user_type)
            .unwrap_or_default()
    }

    pub fn tier(&self) -> String {
        self.session
            .user
            .as_ref()
            .map(|user| user.tier.clone())
            .unwrap_or_else(|| "free".to_string())
    }

    /// Drops everything tied to the signed-in user.
    pub fn sign_out(&mut self) {
        self.session.clear();
        self.submitted.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{dashboard::DashboardData, session::SessionUser, verdict::Verdict};

    fn result(id: &str) -> EvaluationResult {
        EvaluationResult {
            evaluation_id: id.to_string(),
            verdict: Verdict::Validate,
            overall_score: 0.9,
            agent_scores: BTreeMap::new(),
            detailed_scores: Vec::new(),
            explanation: String::new(),
            recommendations: Vec::new(),
            timestamp: String::new(),
        }
    }

    #[test]
    fn results_are_found_by_id_until_sign_out() {
        let mut state = AppState::default();
        state.session = Session::signed_in("t".into(), SessionUser::opaque());
        state.record_result("Acme".into(), result("eval-1"));

        assert_eq!(state.find_result("eval-1").unwrap().company_name, "Acme");
        assert!(state.find_result("eval-2").is_none());

        state.sign_out();
        assert!(state.find_result("eval-1").is_none());
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn session_dashboard_rows_open_their_results() {
        let mut state = AppState::default();
        state.record_result("Acme".into(), result("eval-1"));
        state.record_result("Globex".into(), result("eval-2"));

        let data = DashboardData::from_session(&state.submitted, &state.tier());
        let names: Vec<_> = data
            .recent_evaluations
            .iter()
            .map(|row| state.find_result(&row.id).map(|entry| entry.company_name.as_str()))
            .collect();
        assert_eq!(names, vec![Some("Globex"), Some("Acme")]);
    }

    #[test]
    fn signed_out_defaults() {
        let state = AppState::default();
        assert_eq!(state.user_type(), UserType::Founder);
        assert_eq!(state.tier(), "free");
        assert_eq!(state.startup_matches.len(), 3);
        assert_eq!(state.investor_matches.len(), 2);
    }
}
