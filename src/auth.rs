//! Session lifecycle: restore at startup, sign in, sign out.
//!
//! The token lives in three places that must agree: the in-memory session,
//! local storage under [`TOKEN_KEY`], and the API client's bearer. The user
//! record from login is kept under [`USER_KEY`] so opaque tokens restore it.

use time::OffsetDateTime;
use tracing::{info, warn};

use crate::domain::session::{inspect_token, restore_user, Session, SessionUser, TokenShape};
use crate::infra::{ApiClient, ApiError, LocalStorage, TOKEN_KEY, USER_KEY};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

pub fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Reads the stored token. Expired or malformed JWTs are removed and the
/// session starts signed out.
pub fn restore_session(storage: &LocalStorage, now_unix: i64) -> Session {
    let Some(token) = storage.get_string(TOKEN_KEY) else {
        return Session::default();
    };

    let stored = storage.get_json::<SessionUser>(USER_KEY);
    match restore_user(&token, stored, now_unix) {
        Some(user) => {
            info!(user = %user.user_id, "restored stored session");
            Session::signed_in(token, user)
        }
        None => {
            info!("stored token expired or unreadable, discarding");
            forget_credentials(storage);
            Session::default()
        }
    }
}

/// Signs in and records the token everywhere. The error is the text to show
/// next to the form.
pub async fn sign_in(
    client: &ApiClient,
    storage: &LocalStorage,
    email: &str,
    password: &str,
    now_unix: i64,
) -> Result<Session, String> {
    let response = client.login(email, password).await.map_err(|err| match err {
        ApiError::Domain(message) => message,
        other => {
            warn!("login response unusable: {other}");
            LOGIN_FAILED_MESSAGE.to_string()
        }
    })?;

    let user = match inspect_token(&response.access_token) {
        TokenShape::Jwt(claims) if !claims.is_expired(now_unix) => claims.to_user(),
        _ => response.user.unwrap_or_else(SessionUser::opaque),
    };

    client.set_token(Some(response.access_token.clone())).await;
    if let Err(err) = storage.set_string(TOKEN_KEY, &response.access_token) {
        warn!("signed in but could not store token: {err}");
    }
    if let Err(err) = storage.set_json(USER_KEY, &user) {
        warn!("signed in but could not store user: {err}");
    }
    info!(user = %user.user_id, "signed in");
    Ok(Session::signed_in(response.access_token, user))
}

pub async fn sign_out(client: &ApiClient, storage: &LocalStorage) {
    client.set_token(None).await;
    forget_credentials(storage);
    info!("signed out");
}

fn forget_credentials(storage: &LocalStorage) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(err) = storage.remove(key) {
            warn!(key, "failed to remove stored credential: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use serde_json::json;
    use tempfile::{tempdir, TempDir};

    use super::*;
    use crate::config::ClientConfig;
    use crate::domain::UserType;
    use crate::infra::fallback::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_TOKEN};

    const NOW: i64 = 1_750_000_000;

    fn storage() -> (TempDir, LocalStorage) {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::at(dir.path().join("store.json"));
        (dir, storage)
    }

    fn offline_client() -> ApiClient {
        ApiClient::new(&ClientConfig {
            candidates: Vec::new(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    fn jwt(exp: i64) -> String {
        let body = json!({"sub": "u-7", "email": "ana@fund.vc", "exp": exp, "user_type": "investor"});
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(body.to_string())
        )
    }

    #[test]
    fn restore_without_token_is_signed_out() {
        let (_dir, storage) = storage();
        assert!(!restore_session(&storage, NOW).is_authenticated());
    }

    #[test]
    fn restore_keeps_valid_jwt_and_opaque_tokens() {
        let (_dir, storage) = storage();
        storage.set_string(TOKEN_KEY, &jwt(NOW + 60)).unwrap();
        let session = restore_session(&storage, NOW);
        let user = session.user.unwrap();
        assert_eq!(user.email, "ana@fund.vc");
        assert_eq!(user.user_type, UserType::Investor);

        storage.set_string(TOKEN_KEY, DEMO_TOKEN).unwrap();
        let session = restore_session(&storage, NOW);
        assert_eq!(session.token.as_deref(), Some(DEMO_TOKEN));
        assert_eq!(session.user, Some(SessionUser::opaque()));
    }

    #[tokio::test]
    async fn demo_user_survives_restart() {
        let (_dir, storage) = storage();
        let client = offline_client();
        sign_in(&client, &storage, DEMO_EMAIL, DEMO_PASSWORD, NOW)
            .await
            .unwrap();

        let restored = restore_session(&storage, NOW);
        assert_eq!(restored.token.as_deref(), Some(DEMO_TOKEN));
        let user = restored.user.unwrap();
        assert_eq!(user.email, DEMO_EMAIL);
        assert_ne!(user.display_name(), "there");

        sign_out(&client, &storage).await;
        assert_eq!(storage.get_json::<SessionUser>(USER_KEY), None);
        assert!(!restore_session(&storage, NOW).is_authenticated());
    }

    #[test]
    fn restore_discards_expired_jwt() {
        let (_dir, storage) = storage();
        storage.set_string(TOKEN_KEY, &jwt(NOW - 1)).unwrap();

        assert!(!restore_session(&storage, NOW).is_authenticated());
        assert_eq!(storage.get_string(TOKEN_KEY), None);
    }

    #[test]
    fn expired_jwt_also_drops_stored_user() {
        let (_dir, storage) = storage();
        storage.set_string(TOKEN_KEY, &jwt(NOW - 1)).unwrap();
        storage.set_json(USER_KEY, &SessionUser::opaque()).unwrap();

        restore_session(&storage, NOW);
        assert_eq!(storage.get_json::<SessionUser>(USER_KEY), None);
    }

    #[tokio::test]
    async fn demo_sign_in_and_out_updates_every_copy() {
        let (_dir, storage) = storage();
        let client = offline_client();

        let session = sign_in(&client, &storage, DEMO_EMAIL, DEMO_PASSWORD, NOW)
            .await
            .unwrap();
        assert_eq!(session.token.as_deref(), Some(DEMO_TOKEN));
        assert_eq!(session.user.unwrap().email, DEMO_EMAIL);
        assert_eq!(client.token().await.as_deref(), Some(DEMO_TOKEN));
        assert_eq!(storage.get_string(TOKEN_KEY).as_deref(), Some(DEMO_TOKEN));

        sign_out(&client, &storage).await;
        assert_eq!(client.token().await, None);
        assert_eq!(storage.get_string(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn wrong_credentials_surface_the_message() {
        let (_dir, storage) = storage();
        let client = offline_client();

        let err = sign_in(&client, &storage, DEMO_EMAIL, "nope", NOW)
            .await
            .unwrap_err();
        assert_eq!(err, "Invalid credentials");
        assert_eq!(client.token().await, None);
        assert_eq!(storage.get_string(TOKEN_KEY), None);
    }
}
