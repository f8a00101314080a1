//! CSRF token generation and verification.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tower_sessions::Session;

use crate::error::AppResult;

/// Session key for storing CSRF tokens.
const CSRF_SESSION_KEY: &str = "csrf_tokens";

/// Maximum number of tokens to store per session.
const MAX_TOKENS: usize = 10;

/// Token validity period in seconds (1 hour).
const TOKEN_VALIDITY_SECS: i64 = 3600;

/// A token as stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    issued_at: i64,
}

impl StoredToken {
    fn is_live(&self, now: i64) -> bool {
        now - self.issued_at <= TOKEN_VALIDITY_SECS
    }
}

/// Generate a CSRF token and store it in the session.
pub async fn generate_csrf_token(session: &Session) -> AppResult<String> {
    let mut random_bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut random_bytes);

    let now = chrono::Utc::now().timestamp();

    let mut hasher = Sha256::new();
    hasher.update(random_bytes);
    hasher.update(now.to_le_bytes());
    let token = hex::encode(hasher.finalize());

    let mut tokens: Vec<StoredToken> = session.get(CSRF_SESSION_KEY).await?.unwrap_or_default();
    tokens.push(StoredToken {
        token: token.clone(),
        issued_at: now,
    });
    prune(&mut tokens, now);

    session.insert(CSRF_SESSION_KEY, tokens).await?;

    Ok(token)
}

/// Verify a CSRF token against the session.
///
/// Tokens are single-use and time-limited. A missing or empty token is
/// simply invalid.
pub async fn verify_csrf_token(session: &Session, submitted: Option<&str>) -> AppResult<bool> {
    let Some(submitted) = submitted.filter(|s| !s.is_empty()) else {
        return Ok(false);
    };

    let mut tokens: Vec<StoredToken> = session.get(CSRF_SESSION_KEY).await?.unwrap_or_default();
    if tokens.is_empty() {
        return Ok(false);
    }

    let now = chrono::Utc::now().timestamp();
    let valid = take(&mut tokens, submitted, now);
    if valid {
        prune(&mut tokens, now);
        session.insert(CSRF_SESSION_KEY, tokens).await?;
    }

    Ok(valid)
}

/// Remove `submitted` from `tokens` if present and still live.
fn take(tokens: &mut Vec<StoredToken>, submitted: &str, now: i64) -> bool {
    match tokens
        .iter()
        .position(|t| t.token == submitted && t.is_live(now))
    {
        Some(index) => {
            tokens.remove(index);
            true
        }
        None => false,
    }
}

/// Drop expired tokens and keep only the most recent `MAX_TOKENS`.
fn prune(tokens: &mut Vec<StoredToken>, now: i64) {
    tokens.retain(|t| t.is_live(now));
    if tokens.len() > MAX_TOKENS {
        let excess = tokens.len() - MAX_TOKENS;
        tokens.drain(..excess);
    }
}
