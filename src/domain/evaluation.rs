use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// Lifecycle stage of a startup, `1..=8` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LifecycleStage(pub u8);

impl LifecycleStage {
    pub const DEFAULT: LifecycleStage = LifecycleStage(3);
    pub const ALL: [LifecycleStage; 8] = [
        LifecycleStage(1),
        LifecycleStage(2),
        LifecycleStage(3),
        LifecycleStage(4),
        LifecycleStage(5),
        LifecycleStage(6),
        LifecycleStage(7),
        LifecycleStage(8),
    ];

    pub fn label(&self) -> String {
        let name = match self.0 {
            1 => "Ideation",
            2 => "Validation",
            3 => "Early Traction",
            4 => "Growth",
            5 => "Expansion",
            6 => "Maturity",
            7 => "Decline/Pivot",
            8 => "Exit Prep",
            other => return format!("Stage {other}"),
        };
        name.to_string()
    }

    /// "3 - Early Traction" style label for select boxes.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.0, self.label())
    }
}

impl Default for LifecycleStage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Optional financial metrics, kept as entered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burn_rate: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub company_name: String,
    pub stage: LifecycleStage,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_size: Option<String>,
    #[serde(default)]
    pub business_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_info: Option<String>,
    #[serde(default)]
    pub financials: Financials,
    #[serde(default = "default_privacy_mode")]
    pub privacy_mode: bool,
}

fn default_privacy_mode() -> bool {
    true
}

/// The five fixed evaluator roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentRole {
    IdeaHunter,
    MarketMiner,
    ModelJudge,
    RiskOracle,
    ValuatorX,
}

impl AgentRole {
    pub const ALL: [AgentRole; 5] = [
        AgentRole::IdeaHunter,
        AgentRole::MarketMiner,
        AgentRole::ModelJudge,
        AgentRole::RiskOracle,
        AgentRole::ValuatorX,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AgentRole::IdeaHunter => "idea_hunter",
            AgentRole::MarketMiner => "market_miner",
            AgentRole::ModelJudge => "model_judge",
            AgentRole::RiskOracle => "risk_oracle",
            AgentRole::ValuatorX => "valuator_x",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgentRole::IdeaHunter => "Idea Hunter",
            AgentRole::MarketMiner => "Market Miner",
            AgentRole::ModelJudge => "Model Judge",
            AgentRole::RiskOracle => "Risk Oracle",
            AgentRole::ValuatorX => "Valuator X",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        AgentRole::ALL.into_iter().find(|role| role.key() == key)
    }
}

/// Display name for an agent key, falling back to the raw key.
pub fn agent_display_name(key: &str) -> String {
    AgentRole::from_key(key)
        .map(|role| role.display_name().to_string())
        .unwrap_or_else(|| key.replace('_', " "))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentAnalysis {
    pub agent_name: String,
    pub score: f64,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub evaluation_id: String,
    pub verdict: Verdict,
    pub overall_score: f64,
    pub agent_scores: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detailed_scores: Vec<AgentAnalysis>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub timestamp: String,
}

impl EvaluationResult {
    /// Agent scores in evaluator order, unknown agents last.
    pub fn ordered_agent_scores(&self) -> Vec<(String, f64)> {
        let mut ordered: Vec<(String, f64)> = AgentRole::ALL
            .iter()
            .filter_map(|role| {
                self.agent_scores
                    .get(role.key())
                    .map(|score| (role.key().to_string(), *score))
            })
            .collect();
        ordered.extend(
            self.agent_scores
                .iter()
                .filter(|(key, _)| AgentRole::from_key(key).is_none())
                .map(|(key, score)| (key.clone(), *score)),
        );
        ordered
    }
}

/// How much of an evaluation the results page reveals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExplainabilityLevel {
    Summary,
    #[default]
    Detailed,
    FullAudit,
}

impl ExplainabilityLevel {
    pub const ALL: [ExplainabilityLevel; 3] = [
        ExplainabilityLevel::Summary,
        ExplainabilityLevel::Detailed,
        ExplainabilityLevel::FullAudit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExplainabilityLevel::Summary => "Summary",
            ExplainabilityLevel::Detailed => "Detailed",
            ExplainabilityLevel::FullAudit => "Full Audit",
        }
    }

    pub fn shows_agent_analysis(&self) -> bool {
        *self >= ExplainabilityLevel::Detailed
    }

    pub fn shows_red_flags(&self) -> bool {
        *self == ExplainabilityLevel::FullAudit
    }
}

/// A result kept in session memory together with the submitted company name.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmittedEvaluation {
    pub company_name: String,
    pub result: EvaluationResult,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStep {
    BasicInfo,
    BusinessDetails,
    Financials,
    Submit,
}

impl FormStep {
    pub const ALL: [FormStep; 4] = [
        FormStep::BasicInfo,
        FormStep::BusinessDetails,
        FormStep::Financials,
        FormStep::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormStep::BasicInfo => "Basic Info",
            FormStep::BusinessDetails => "Business Details",
            FormStep::Financials => "Financials",
            FormStep::Submit => "Submit",
        }
    }

    pub fn index(&self) -> usize {
        FormStep::ALL
            .iter()
            .position(|step| step == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Option<FormStep> {
        FormStep::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<FormStep> {
        self.index()
            .checked_sub(1)
            .and_then(|idx| FormStep::ALL.get(idx).copied())
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// In-progress form input across the four steps.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationDraft {
    pub step: FormStep,
    pub company_name: String,
    pub stage: LifecycleStage,
    pub description: String,
    pub market_size: String,
    pub business_model: String,
    pub team_info: String,
    pub revenue: String,
    pub users: String,
    pub growth_rate: String,
    pub burn_rate: String,
    pub privacy_mode: bool,
}

impl Default for EvaluationDraft {
    fn default() -> Self {
        Self {
            step: FormStep::BasicInfo,
            company_name: String::new(),
            stage: LifecycleStage::DEFAULT,
            description: String::new(),
            market_size: String::new(),
            business_model: String::new(),
            team_info: String::new(),
            revenue: String::new(),
            users: String::new(),
            growth_rate: String::new(),
            burn_rate: String::new(),
            privacy_mode: true,
        }
    }
}

impl EvaluationDraft {
    /// Company name and description are the only required fields.
    pub fn has_required_fields(&self) -> bool {
        !self.company_name.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            FormStep::BasicInfo => self.has_required_fields(),
            FormStep::Submit => false,
            _ => true,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    pub fn to_request(&self) -> Result<EvaluationRequest, String> {
        if !self.has_required_fields() {
            return Err("Company name and description are required".to_string());
        }

        Ok(EvaluationRequest {
            company_name: self.company_name.trim().to_string(),
            stage: self.stage,
            description: self.description.trim().to_string(),
            market_size: non_blank(&self.market_size),
            business_model: self.business_model.trim().to_string(),
            team_info: non_blank(&self.team_info),
            financials: Financials {
                revenue: non_blank(&self.revenue),
                users: non_blank(&self.users),
                growth_rate: non_blank(&self.growth_rate),
                burn_rate: non_blank(&self.burn_rate),
            },
            privacy_mode: self.privacy_mode,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> EvaluationDraft {
        EvaluationDraft {
            company_name: "TechFlow AI".into(),
            description: "Workflow automation for enterprises".into(),
            ..EvaluationDraft::default()
        }
    }

    #[test]
    fn first_step_requires_name_and_description() {
        let mut draft = EvaluationDraft::default();
        assert!(!draft.can_advance());
        assert!(!draft.advance());
        assert_eq!(draft.step, FormStep::BasicInfo);

        draft.company_name = "Acme".into();
        draft.description = "   ".into();
        assert!(!draft.can_advance());

        draft.description = "Rockets".into();
        assert!(draft.advance());
        assert_eq!(draft.step, FormStep::BusinessDetails);
    }

    #[test]
    fn steps_walk_forward_and_back() {
        let mut draft = filled_draft();
        assert!(!draft.can_go_back());
        assert!(draft.advance());
        assert!(draft.advance());
        assert!(draft.advance());
        assert_eq!(draft.step, FormStep::Submit);
        assert!(draft.step.is_last());
        assert!(!draft.advance());

        draft.back();
        assert_eq!(draft.step, FormStep::Financials);
        draft.back();
        draft.back();
        draft.back();
        assert_eq!(draft.step, FormStep::BasicInfo);
    }

    #[test]
    fn request_drops_blank_optionals() {
        let mut draft = filled_draft();
        draft.revenue = " 120000 ".into();
        draft.market_size = "  ".into();
        let request = draft.to_request().unwrap();

        assert_eq!(request.financials.revenue.as_deref(), Some("120000"));
        assert!(request.market_size.is_none());
        assert!(request.privacy_mode);
        assert_eq!(request.stage, LifecycleStage(3));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["stage"], 3);
        assert!(json.get("market_size").is_none());
        assert_eq!(json["financials"]["revenue"], "120000");
    }

    #[test]
    fn request_rejects_missing_fields() {
        assert!(EvaluationDraft::default().to_request().is_err());
    }

    #[test]
    fn stage_labels() {
        assert_eq!(LifecycleStage(3).option_label(), "3 - Early Traction");
        assert_eq!(LifecycleStage(8).label(), "Exit Prep");
        assert_eq!(LifecycleStage(12).label(), "Stage 12");
    }

    #[test]
    fn result_parses_minimal_server_shape() {
        let raw = serde_json::json!({
            "evaluation_id": "eval-1",
            "verdict": "conditional",
            "overall_score": 0.67,
            "agent_scores": {"valuator_x": 0.7, "idea_hunter": 0.8, "custom_agent": 0.5},
            "explanation": "ok",
            "recommendations": ["a", "b"],
            "timestamp": "2025-06-08T10:30:00Z"
        });
        let result: EvaluationResult = serde_json::from_value(raw).unwrap();
        assert_eq!(result.verdict, Verdict::Conditional);
        assert!(result.detailed_scores.is_empty());

        let ordered = result.ordered_agent_scores();
        let keys: Vec<_> = ordered.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["idea_hunter", "valuator_x", "custom_agent"]);
        assert_eq!(agent_display_name("custom_agent"), "custom agent");
        assert_eq!(agent_display_name("risk_oracle"), "Risk Oracle");
    }

    #[test]
    fn explainability_gates_detail() {
        assert_eq!(ExplainabilityLevel::default(), ExplainabilityLevel::Detailed);
        assert!(!ExplainabilityLevel::Summary.shows_agent_analysis());
        assert!(ExplainabilityLevel::Detailed.shows_agent_analysis());
        assert!(!ExplainabilityLevel::Detailed.shows_red_flags());
        assert!(ExplainabilityLevel::FullAudit.shows_red_flags());
        assert_eq!(ExplainabilityLevel::FullAudit.label(), "Full Audit");
    }
}
