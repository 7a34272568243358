//! Local answers used once every candidate base URL has failed.

use rand::Rng;
use reqwest::Method;
use serde_json::{json, Value};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::api::{ApiCall, EVALUATE_PATH, LOGIN_PATH};
use crate::domain::{AgentRole, Verdict};

pub const DEMO_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "testpassword";
pub const DEMO_TOKEN: &str = "demo-token-mock";
pub const DEMO_USER_ID: &str = "demo-user";

pub const UNAVAILABLE_MESSAGE: &str = "API not available - using demo mode";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

const DEMO_RECOMMENDATIONS: [&str; 5] = [
    "Validate core business assumptions",
    "Build minimum viable product (MVP)",
    "Focus on customer acquisition",
    "Track key performance metrics",
    "Consider strategic partnerships",
];
const DEMO_RECOMMENDATION_COUNT: usize = 3;
const DEMO_SCORE_RANGE: std::ops::Range<f64> = 0.75..0.95;

/// Produces a response when no real server answered.
pub trait FallbackResponder: Send + Sync {
    fn respond(&self, call: &ApiCall) -> Value;
}

/// Demo-mode answers: a fixed demo login and a fabricated evaluation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoResponder;

impl FallbackResponder for DemoResponder {
    fn respond(&self, call: &ApiCall) -> Value {
        match (call.path.as_str(), &call.method) {
            (LOGIN_PATH, &Method::POST) => demo_login(call.body.as_ref()),
            (EVALUATE_PATH, &Method::POST) => {
                let score = rand::thread_rng().gen_range(DEMO_SCORE_RANGE);
                fabricate_evaluation(score, OffsetDateTime::now_utc())
            }
            _ => unavailable(),
        }
    }
}

/// Always reports that the API is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableResponder;

impl FallbackResponder for UnavailableResponder {
    fn respond(&self, _call: &ApiCall) -> Value {
        unavailable()
    }
}

fn unavailable() -> Value {
    json!({ "error": UNAVAILABLE_MESSAGE })
}

fn demo_login(body: Option<&Value>) -> Value {
    let field = |name: &str| body.and_then(|b| b.get(name)).and_then(Value::as_str);
    if field("email") == Some(DEMO_EMAIL) && field("password") == Some(DEMO_PASSWORD) {
        json!({
            "access_token": DEMO_TOKEN,
            "token_type": "bearer",
            "user": { "email": DEMO_EMAIL, "user_id": DEMO_USER_ID }
        })
    } else {
        json!({ "error": INVALID_CREDENTIALS_MESSAGE })
    }
}

fn agent_offset(role: AgentRole) -> f64 {
    match role {
        AgentRole::IdeaHunter => 0.10,
        AgentRole::MarketMiner => -0.05,
        AgentRole::ModelJudge => 0.05,
        AgentRole::RiskOracle => -0.10,
        AgentRole::ValuatorX => 0.15,
    }
}

/// Builds a demo evaluation payload for `score` at `now`.
pub fn fabricate_evaluation(score: f64, now: OffsetDateTime) -> Value {
    let agent_scores: serde_json::Map<String, Value> = AgentRole::ALL
        .iter()
        .map(|role| {
            let agent = (score + agent_offset(*role)).clamp(0.1, 1.0);
            (role.key().to_string(), json!(agent))
        })
        .collect();
    let potential = if score > 0.8 { "strong" } else { "moderate" };
    let millis = now.unix_timestamp_nanos() / 1_000_000;

    json!({
        "evaluation_id": format!("demo-eval-{millis}"),
        "verdict": Verdict::from_score(score).as_str(),
        "overall_score": score,
        "agent_scores": agent_scores,
        "explanation": format!(
            "Based on your submission, this startup shows {potential} potential with a score of {}%.",
            (score * 100.0).round()
        ),
        "recommendations": &DEMO_RECOMMENDATIONS[..DEMO_RECOMMENDATION_COUNT],
        "timestamp": now.format(&Rfc3339).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::EvaluationResult;

    #[test]
    fn demo_login_requires_exact_credentials() {
        let ok = DemoResponder.respond(&ApiCall::post(
            LOGIN_PATH,
            json!({ "email": DEMO_EMAIL, "password": DEMO_PASSWORD }),
        ));
        assert_eq!(ok["access_token"], DEMO_TOKEN);
        assert_eq!(ok["user"]["user_id"], DEMO_USER_ID);

        let bad = DemoResponder.respond(&ApiCall::post(
            LOGIN_PATH,
            json!({ "email": DEMO_EMAIL, "password": "nope" }),
        ));
        assert_eq!(bad["error"], INVALID_CREDENTIALS_MESSAGE);
        assert!(bad.get("access_token").is_none());
    }

    #[test]
    fn login_needs_post() {
        let reply = DemoResponder.respond(&ApiCall::get(LOGIN_PATH));
        assert_eq!(reply["error"], UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn fabricated_evaluation_decodes() {
        let raw = fabricate_evaluation(0.85, datetime!(2025-06-08 10:30:00 UTC));
        let result: EvaluationResult = serde_json::from_value(raw).unwrap();

        assert_eq!(result.verdict, Verdict::Validate);
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.recommendations[0], "Validate core business assumptions");
        assert_eq!(result.evaluation_id, "demo-eval-1749378600000");
        assert_eq!(result.timestamp, "2025-06-08T10:30:00Z");
        assert!(result.explanation.contains("strong potential with a score of 85%"));
    }

    #[test]
    fn agent_scores_are_offset_and_clamped() {
        let raw = fabricate_evaluation(0.9, OffsetDateTime::UNIX_EPOCH);
        let scores = raw["agent_scores"].as_object().unwrap();
        assert_eq!(scores.len(), 5);
        assert_eq!(scores["valuator_x"].as_f64(), Some(1.0));
        assert!((scores["risk_oracle"].as_f64().unwrap() - 0.8).abs() < 1e-9);

        let low = fabricate_evaluation(0.15, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(low["agent_scores"]["risk_oracle"].as_f64(), Some(0.1));
        assert_eq!(low["verdict"], "pivot");
    }

    #[test]
    fn verdict_boundaries() {
        let at = fabricate_evaluation(0.80, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(at["verdict"], "conditional");
        assert!(at["explanation"].as_str().unwrap().contains("moderate"));

        let above = fabricate_evaluation(0.800_000_01, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(above["verdict"], "validate");
    }

    #[test]
    fn unavailable_responder_ignores_path() {
        let reply = UnavailableResponder.respond(&ApiCall::post(
            LOGIN_PATH,
            json!({ "email": DEMO_EMAIL, "password": DEMO_PASSWORD }),
        ));
        assert_eq!(reply, json!({ "error": UNAVAILABLE_MESSAGE }));
    }
}
