//! Client-side session token inspection and login throttling.
//!
//! The token payload is decoded locally for routing decisions only; no
//! signature verification happens client-side. Every real request is
//! re-checked by the backend.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not in header.payload.signature form")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not valid JSON")]
    Payload,
}

/// Claims carried in the session token payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry as Unix seconds. Tokens without one never expire client-side.
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decode the payload segment of a `header.payload.signature` token.
    /// A leading `Bearer ` prefix is tolerated.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let raw = token.strip_prefix("Bearer ").unwrap_or(token);

        let mut segments = raw.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|_| TokenError::Encoding)?;
        serde_json::from_slice(&bytes).map_err(|_| TokenError::Payload)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp
            .is_some_and(|exp| exp * 1000 < now.timestamp_millis())
    }

    /// Minutes until expiry, clamped at zero.
    pub fn minutes_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        self.exp.map_or(0, |exp| {
            ((exp * 1000 - now.timestamp_millis()) / 60_000).max(0)
        })
    }
}

const MAX_FAILURES: u32 = 5;
const LOCKOUT_SECONDS: i64 = 30;

/// Session-local lockout after repeated login failures.
///
/// Independent of backend state: while the cooldown runs, attempts are
/// rejected before any network call. Once it passes the counter restarts.
#[derive(Debug, Default)]
pub struct LoginThrottle {
    failures: u32,
    locked_until: Option<DateTime<Utc>>,
}

impl LoginThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Seconds left on the cooldown at `now`, if locked.
    pub fn locked_for(&self, now: DateTime<Utc>) -> Option<i64> {
        let until = self.locked_until?;
        let left = (until - now).num_seconds();
        (left > 0).then_some(left)
    }

    /// Gate an attempt. `Err` carries the remaining cooldown in seconds.
    pub fn check(&mut self, now: DateTime<Utc>) -> Result<(), i64> {
        if let Some(left) = self.locked_for(now) {
            return Err(left);
        }
        if self.locked_until.take().is_some() {
            self.failures = 0;
        }
        Ok(())
    }

    pub fn record_failure(&mut self, now: DateTime<Utc>) {
        self.failures += 1;
        if self.failures >= MAX_FAILURES {
            self.locked_until = Some(now + Duration::seconds(LOCKOUT_SECONDS));
        }
    }

    pub fn record_success(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn forge_token(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            "forged-signature"
        )
    }

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().expect("valid instant")
    }

    #[test]
    fn test_decode_reads_expiry() {
        let token = forge_token(r#"{"exp":1700000000,"sub":"alice"}"#);
        let claims = TokenClaims::decode(&token).expect("should decode");
        assert_eq!(claims.exp, Some(1_700_000_000));
    }

    #[test]
    fn test_decode_tolerates_bearer_prefix() {
        let token = format!("Bearer {}", forge_token(r#"{"exp":1700000000}"#));
        assert!(TokenClaims::decode(&token).is_ok());
    }

    #[test]
    fn test_malformed_tokens_fail_closed() {
        assert_eq!(
            TokenClaims::decode("not-a-token"),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            TokenClaims::decode("a.b.c.d"),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            TokenClaims::decode("head.!!not-base64!!.sig"),
            Err(TokenError::Encoding)
        );
    }

    #[test]
    fn test_expiry_comparison() {
        let claims = TokenClaims { exp: Some(1000) };
        assert!(!claims.is_expired(instant(999)));
        assert!(!claims.is_expired(instant(1000)));
        assert!(claims.is_expired(instant(1001)));

        let eternal = TokenClaims { exp: None };
        assert!(!eternal.is_expired(instant(i32::MAX as i64)));
    }

    #[test]
    fn test_minutes_until_expiry_clamps_at_zero() {
        let claims = TokenClaims { exp: Some(600) };
        assert_eq!(claims.minutes_until_expiry(instant(0)), 10);
        assert_eq!(claims.minutes_until_expiry(instant(900)), 0);
    }

    #[test]
    fn test_five_failures_lock_the_sixth_attempt() {
        let mut throttle = LoginThrottle::new();
        let now = instant(0);

        for _ in 0..5 {
            assert!(throttle.check(now).is_ok());
            throttle.record_failure(now);
        }

        // Sixth attempt is rejected locally with the cooldown remaining.
        assert_eq!(throttle.check(now), Err(30));
        assert_eq!(throttle.check(instant(29)), Err(1));
    }

    #[test]
    fn test_cooldown_expires_and_counter_restarts() {
        let mut throttle = LoginThrottle::new();
        let now = instant(0);
        for _ in 0..5 {
            throttle.record_failure(now);
        }
        assert!(throttle.check(instant(10)).is_err());

        assert!(throttle.check(instant(30)).is_ok());
        assert_eq!(throttle.failures(), 0);
    }

    #[test]
    fn test_success_resets_the_counter() {
        let mut throttle = LoginThrottle::new();
        let now = instant(0);
        for _ in 0..4 {
            throttle.record_failure(now);
        }
        throttle.record_success();
        assert_eq!(throttle.failures(), 0);

        throttle.record_failure(now);
        assert!(throttle.check(now).is_ok());
    }
}
