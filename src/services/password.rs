use bcrypt::{hash, verify};
use crate::errors::AppResult;

/// bcrypt ignores everything past this many bytes of input.
pub const MAX_PASSWORD_BYTES: usize = 72;

pub fn fits_bcrypt(plain: &str) -> bool {
    plain.len() <= MAX_PASSWORD_BYTES
}

/// Salted bcrypt hash; the salt and cost are encoded in the returned string.
/// Runs on the blocking pool.
pub async fn hash_password(plain: String, cost: u32) -> AppResult<String> {
    Ok(tokio::task::spawn_blocking(move || hash(plain.as_bytes(), cost)).await??)
}

/// Passwords too long for bcrypt never match.
pub async fn verify_password(plain: String, password_hash: String) -> AppResult<bool> {
    if !fits_bcrypt(&plain) {
        return Ok(false);
    }
    Ok(tokio::task::spawn_blocking(move || verify(plain.as_bytes(), &password_hash)).await??)
}
