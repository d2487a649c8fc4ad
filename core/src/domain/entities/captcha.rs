//! Captcha challenge entity: short-lived keyed state with expiry.

use chrono::{DateTime, Duration, Utc};

/// A pending captcha challenge.
///
/// The expected answer is stored case-folded; comparison happens the same
/// way. An entry is consumed by its first verification attempt regardless
/// of outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptchaChallenge {
    /// Opaque challenge identifier
    pub id: String,

    /// Expected answer, lowercased
    pub answer: String,

    /// Timestamp when the challenge was issued
    pub created_at: DateTime<Utc>,

    /// Absolute expiry
    pub expires_at: DateTime<Utc>,
}

impl CaptchaChallenge {
    /// Create a challenge expiring `ttl_minutes` from now
    pub fn new(id: String, answer: &str, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            answer: answer.to_lowercase(),
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
        }
    }

    /// Whether the challenge has passed its expiry
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Case-folded answer comparison
    pub fn matches(&self, answer: &str) -> bool {
        self.answer == answer.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_is_case_folded() {
        let challenge = CaptchaChallenge::new("c1".to_string(), "AbCd", 5);
        assert_eq!(challenge.answer, "abcd");
        assert!(challenge.matches("aBcD"));
        assert!(!challenge.matches("abce"));
    }

    #[test]
    fn test_expiry() {
        let mut challenge = CaptchaChallenge::new("c1".to_string(), "abcd", 5);
        assert!(!challenge.is_expired(Utc::now()));

        challenge.expires_at = Utc::now() - Duration::seconds(1);
        assert!(challenge.is_expired(Utc::now()));
    }
}
