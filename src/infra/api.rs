//! Asynchronous client for the AXIVAI API.
//!
//! - Probes an ordered list of candidate base URLs, one at a time.
//! - Remembers the base that last answered, for display only.
//! - Hands the call to a [`FallbackResponder`] once every candidate failed.

use std::sync::Arc;

use reqwest::{header::CONTENT_TYPE, Client, Method, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::fallback::{DemoResponder, FallbackResponder, UnavailableResponder};
use crate::config::ClientConfig;
use crate::domain::{DashboardData, EvaluationRequest, EvaluationResult, SessionUser};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const EVALUATE_PATH: &str = "/api/validate/startup";
pub const DASHBOARD_PATH: &str = "/api/user/dashboard";

/// Empty prefix: resolve the path against the configured origin.
pub const SAME_ORIGIN: &str = "";

const USER_AGENT: &str = concat!("axivai/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("no origin configured for same-origin requests")]
    MissingOrigin,
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(StatusCode),
    #[error("{0}")]
    Domain(String),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One logical request, independent of the base it is sent to.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiCall {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
}

impl ApiCall {
    pub fn get(path: &str) -> Self {
        Self {
            path: path.to_string(),
            method: Method::GET,
            body: None,
        }
    }

    pub fn post(path: &str, body: Value) -> Self {
        Self {
            path: path.to_string(),
            method: Method::POST,
            body: Some(body),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    origin: Option<Url>,
    candidates: Vec<String>,
    token: Arc<Mutex<Option<String>>>,
    preferred: Arc<Mutex<Option<String>>>,
    fallback: Arc<dyn FallbackResponder>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;
        let mut candidates = Vec::with_capacity(config.candidates.len() + 1);
        candidates.push(SAME_ORIGIN.to_string());
        candidates.extend(config.candidates.iter().cloned());

        let client = Self {
            http,
            origin: config.origin.clone(),
            candidates,
            token: Arc::new(Mutex::new(None)),
            preferred: Arc::new(Mutex::new(None)),
            fallback: Arc::new(UnavailableResponder),
        };
        Ok(if config.demo_mode {
            client.with_fallback(Arc::new(DemoResponder))
        } else {
            client
        })
    }

    /// Replaces what answers once every candidate has failed.
    pub fn with_fallback(self, fallback: Arc<dyn FallbackResponder>) -> Self {
        Self { fallback, ..self }
    }

    /// Starts with a bearer already held, e.g. from a restored session.
    pub fn with_token(self, token: Option<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(token)),
            ..self
        }
    }

    /// Candidate bases in probe order, same-origin first.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Base that answered most recently. Empty string is same-origin.
    pub async fn preferred_base(&self) -> Option<String> {
        self.preferred.lock().await.clone()
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token.lock().await = token;
    }

    #[cfg(test)]
    pub async fn token(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    /// Sends `call` to each candidate in order and returns the first 2xx JSON
    /// body. Never fails: when nothing answers the fallback's reply is
    /// returned instead.
    pub async fn call(&self, call: ApiCall) -> Value {
        for base in &self.candidates {
            match self.attempt(base, &call).await {
                Ok(value) => {
                    info!(
                        base = display_base(base),
                        path = %call.path,
                        "API candidate answered"
                    );
                    *self.preferred.lock().await = Some(base.clone());
                    return value;
                }
                Err(error) => {
                    debug!(
                        base = display_base(base),
                        path = %call.path,
                        %error,
                        "API candidate failed, trying next"
                    );
                }
            }
        }

        warn!(
            path = %call.path,
            method = %call.method,
            "all API candidates failed, answering locally"
        );
        self.fallback.respond(&call)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = json!({ "email": email, "password": password });
        decode(self.call(ApiCall::post(LOGIN_PATH, body)).await)
    }

    pub async fn submit_evaluation(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResult, ApiError> {
        let body = serde_json::to_value(request)?;
        decode(self.call(ApiCall::post(EVALUATE_PATH, body)).await)
    }

    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        decode(self.call(ApiCall::get(DASHBOARD_PATH)).await)
    }

    async fn attempt(&self, base: &str, call: &ApiCall) -> Result<Value, ApiError> {
        let url = self.url(base, &call.path)?;
        let mut request = self
            .http
            .request(call.method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.token.lock().await.as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.json::<Value>().await?)
    }

    fn url(&self, base: &str, path: &str) -> Result<Url, ApiError> {
        if base == SAME_ORIGIN {
            let origin = self.origin.as_ref().ok_or(ApiError::MissingOrigin)?;
            return Ok(origin.join(path)?);
        }
        Ok(Url::parse(&format!("{}{path}", base.trim_end_matches('/')))?)
    }
}

fn display_base(base: &str) -> &str {
    if base == SAME_ORIGIN {
        "<same-origin>"
    } else {
        base
    }
}

/// Text of an `error` or `detail` field, if the payload carries one.
pub fn domain_error(value: &Value) -> Option<String> {
    ["error", "detail"].iter().find_map(|key| {
        value.get(*key).map(|field| match field {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    if let Some(message) = domain_error(&value) {
        return Err(ApiError::Domain(message));
    }
    Ok(serde_json::from_value(value)?)
}
