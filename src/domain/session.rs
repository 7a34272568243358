//! Session user and the one-shot token check performed at startup.
//!
//! Tokens are stored and forwarded as-is. The only inspection is decoding the
//! JWT payload (no signature check) to read the user and its expiry.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Founder,
    Investor,
    Analyst,
}

impl UserType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "investor" => UserType::Investor,
            "analyst" => UserType::Analyst,
            _ => UserType::Founder,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(default = "default_tier")]
    pub tier: String,
}

fn default_tier() -> String {
    "free".to_string()
}

impl SessionUser {
    /// User for a token that carries no readable claims.
    pub fn opaque() -> Self {
        Self {
            user_id: "session".to_string(),
            email: String::new(),
            user_type: UserType::Founder,
            tier: default_tier(),
        }
    }

    /// Local part of the email, used in greetings.
    pub fn display_name(&self) -> &str {
        match self.email.split('@').next() {
            Some(local) if !local.is_empty() => local,
            _ => "there",
        }
    }

    pub fn initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|ch| ch.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub email: String,
    pub exp: i64,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
}

impl TokenClaims {
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.exp <= now_unix
    }

    pub fn to_user(&self) -> SessionUser {
        SessionUser {
            user_id: self.sub.clone(),
            email: self.email.clone(),
            user_type: self
                .user_type
                .as_deref()
                .map(UserType::parse)
                .unwrap_or_default(),
            tier: self.tier.clone().unwrap_or_else(default_tier),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenShape {
    /// Three segments whose payload parsed as claims.
    Jwt(TokenClaims),
    /// Three segments, but the payload is not decodable claims.
    MalformedJwt,
    /// Anything else, e.g. the demo token.
    Opaque,
}

pub fn inspect_token(token: &str) -> TokenShape {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return TokenShape::Opaque;
    }

    let claims = URL_SAFE_NO_PAD
        .decode(segments[1].trim_end_matches('='))
        .ok()
        .and_then(|bytes| serde_json::from_slice::<TokenClaims>(&bytes).ok());

    match claims {
        Some(claims) => TokenShape::Jwt(claims),
        None => TokenShape::MalformedJwt,
    }
}

/// Decides what a stored token means at startup. `None` means the token must
/// be discarded and the session starts signed out. Claims win over `stored`,
/// which only fills in for opaque tokens.
pub fn restore_user(
    token: &str,
    stored: Option<SessionUser>,
    now_unix: i64,
) -> Option<SessionUser> {
    match inspect_token(token) {
        TokenShape::Jwt(claims) if !claims.is_expired(now_unix) => Some(claims.to_user()),
        TokenShape::Jwt(_) | TokenShape::MalformedJwt => None,
        TokenShape::Opaque => Some(stored.unwrap_or_else(SessionUser::opaque)),
    }
}

/// Signed-in state shared through the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn signed_in(token: String, user: SessionUser) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn valid_jwt_restores_claims_user() {
        let token = jwt_with(serde_json::json!({
            "sub": "user-42",
            "email": "ada@example.com",
            "exp": 2_000,
            "user_type": "investor",
            "tier": "pro"
        }));

        let user = restore_user(&token, None, 1_000).expect("token should be valid");
        assert_eq!(user.user_id, "user-42");
        assert_eq!(user.user_type, UserType::Investor);
        assert_eq!(user.tier, "pro");
        assert_eq!(user.display_name(), "ada");
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn expired_jwt_is_discarded() {
        let token = jwt_with(serde_json::json!({"sub": "u", "email": "u@x.io", "exp": 1_000}));
        assert!(restore_user(&token, None, 1_000).is_none());
        assert!(restore_user(&token, None, 5_000).is_none());
    }

    #[test]
    fn malformed_jwt_is_discarded() {
        assert_eq!(inspect_token("a.!!!.c"), TokenShape::MalformedJwt);
        assert!(restore_user("a.!!!.c", None, 0).is_none());
    }

    #[test]
    fn opaque_token_is_kept_with_default_user() {
        let user = restore_user("demo-token-mock", None, 0).unwrap();
        assert_eq!(user, SessionUser::opaque());
        assert_eq!(user.tier, "free");
        assert_eq!(user.display_name(), "there");
    }

    #[test]
    fn opaque_token_prefers_stored_user() {
        let stored = SessionUser {
            user_id: "demo-user".into(),
            email: "demo@axivai.com".into(),
            user_type: UserType::Founder,
            tier: "free".into(),
        };
        let user = restore_user("demo-token-mock", Some(stored.clone()), 0).unwrap();
        assert_eq!(user, stored);
        assert_eq!(user.initial(), "D");

        let token = jwt_with(serde_json::json!({"sub": "u-1", "email": "kim@x.io", "exp": 10}));
        let user = restore_user(&token, Some(stored), 0).unwrap();
        assert_eq!(user.email, "kim@x.io");
    }

    #[test]
    fn claims_default_to_founder_on_free_tier() {
        let token = jwt_with(serde_json::json!({"sub": "u", "email": "u@x.io", "exp": 10}));
        let user = restore_user(&token, None, 0).unwrap();
        assert_eq!(user.user_type, UserType::Founder);
        assert_eq!(user.tier, "free");
    }

    #[test]
    fn session_clear_signs_out() {
        let mut session = Session::signed_in("t".into(), SessionUser::opaque());
        assert!(session.is_authenticated());
        session.clear();
        assert!(!session.is_authenticated());
    }
}
