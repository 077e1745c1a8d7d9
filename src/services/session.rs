use tower_sessions::{cookie::Key, Session};
use crate::config::SessionConfig;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::services::UserStore;

const USER_ID_KEY: &str = "user_id";
const FLASH_KEY: &str = "_flashes";

/// Marks the session as authenticated for `user`, under a fresh session id.
pub async fn login(session: &Session, user: &User) -> AppResult<()> {
    session.cycle_id().await?;
    session.insert(USER_ID_KEY, user.id).await?;
    tracing::info!("User {} logged in", user.email);
    Ok(())
}

pub async fn logout(session: &Session) -> AppResult<()> {
    session.flush().await?;
    Ok(())
}

pub async fn is_authenticated(session: &Session) -> AppResult<bool> {
    Ok(session.get::<i64>(USER_ID_KEY).await?.is_some())
}

/// Resolves the session to its user. A session pointing at a user that no
/// longer exists fails with `NotFound`.
pub async fn current_user(session: &Session, store: &UserStore) -> AppResult<Option<User>> {
    match session.get::<i64>(USER_ID_KEY).await? {
        Some(id) => Ok(Some(store.get_by_id(id).await?)),
        None => Ok(None),
    }
}

pub async fn flash(session: &Session, message: impl Into<String>) -> AppResult<()> {
    let mut messages = session.get::<Vec<String>>(FLASH_KEY).await?.unwrap_or_default();
    messages.push(message.into());
    session.insert(FLASH_KEY, messages).await?;
    Ok(())
}

pub async fn take_flashes(session: &Session) -> AppResult<Vec<String>> {
    Ok(session.remove::<Vec<String>>(FLASH_KEY).await?.unwrap_or_default())
}

/// Cookie signing key: the configured secret, or a fresh one per process.
pub fn signing_key(config: &SessionConfig) -> AppResult<Key> {
    match config.secret.as_deref() {
        Some(secret) => {
            let bytes = hex::decode(secret.trim())
                .map_err(|e| AppError::Config(format!("session.secret is not hex: {}", e)))?;
            Key::try_from(bytes.as_slice())
                .map_err(|e| AppError::Config(format!("session.secret: {}", e)))
        }
        None => {
            tracing::warn!("No session.secret configured; sessions will not survive a restart");
            Ok(Key::generate())
        }
    }
}
