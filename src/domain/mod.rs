//! Entities and presentation rules for the evaluation console.

pub mod app_state;
pub mod dashboard;
pub mod evaluation;
pub mod matching;
pub mod privacy;
pub mod session;
pub mod verdict;

pub use app_state::AppState;
pub use dashboard::DashboardData;
pub use evaluation::{
    agent_display_name, AgentRole, EvaluationDraft, EvaluationRequest, EvaluationResult,
    ExplainabilityLevel, FormStep, LifecycleStage,
};
pub use matching::{InvestorMatch, MatchFilter, MatchTab, StartupMatch};
pub use privacy::{PrivacySetting, PrivacySettings};
pub use session::{Session, SessionUser, UserType};
pub use verdict::{percent_label, Verdict};
