//! Ephemeral, time-bounded captcha challenge store.
//!
//! Keyed in-process state with expiry, owned by whoever holds the
//! `Arc<CaptchaStore>` rather than living in a process-wide global.
//! Consumption is an atomic take under the store mutex, so at most one
//! verify call ever observes a given entry.

use std::collections::HashMap;
use chrono::Utc;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::debug;

use gz_shared::config::CaptchaConfig;

use crate::domain::entities::CaptchaChallenge;
use crate::errors::{AuthError, DomainResult};

/// Alphabet for challenge text; visually ambiguous characters excluded
const CHALLENGE_ALPHABET: &[u8] = b"abcdefghjkmnpqrstuvwxyz23456789";

/// A freshly issued challenge handed to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCaptcha {
    /// Opaque challenge identifier
    pub id: String,
    /// Challenge text for the caller to render
    pub challenge: String,
}

/// In-process captcha challenge store with a fixed TTL
pub struct CaptchaStore {
    entries: Mutex<HashMap<String, CaptchaChallenge>>,
    config: CaptchaConfig,
}

impl CaptchaStore {
    /// Create a new store
    pub fn new(config: CaptchaConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Issue a new challenge.
    ///
    /// The id is a millisecond-timestamp prefix with a random suffix;
    /// uniqueness is the only requirement on its shape. The expected
    /// answer is stored case-folded.
    pub async fn issue(&self) -> IssuedCaptcha {
        let challenge = Self::random_text(self.config.challenge_length);
        let id = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            Self::random_text(6)
        );

        let entry = CaptchaChallenge::new(id.clone(), &challenge, self.config.ttl_minutes);

        let mut entries = self.entries.lock().await;
        entries.insert(id.clone(), entry);
        debug!(captcha_id = %id, pending = entries.len(), "issued captcha challenge");

        IssuedCaptcha { id, challenge }
    }

    /// Verify an answer against a pending challenge.
    ///
    /// The entry is consumed by this call regardless of outcome: a given
    /// id can never be verified twice.
    ///
    /// # Returns
    /// * `Ok(bool)` - Whether the case-folded answer matched
    /// * `Err(AuthError::CaptchaNotFound)` - No pending challenge for the id
    /// * `Err(AuthError::CaptchaExpired)` - Challenge existed but was past
    ///   its TTL; the entry has been deleted
    pub async fn verify(&self, id: &str, answer: &str) -> DomainResult<bool> {
        let entry = {
            let mut entries = self.entries.lock().await;
            entries.remove(id)
        };

        let Some(entry) = entry else {
            return Err(AuthError::CaptchaNotFound.into());
        };

        if entry.is_expired(Utc::now()) {
            return Err(AuthError::CaptchaExpired.into());
        }

        Ok(entry.matches(answer))
    }

    /// Remove expired entries that were never verified.
    ///
    /// # Returns
    /// Number of entries removed
    pub async fn sweep(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Number of pending challenges
    pub async fn pending(&self) -> usize {
        self.entries.lock().await.len()
    }

    fn random_text(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| {
                let idx = rng.gen_range(0..CHALLENGE_ALPHABET.len());
                CHALLENGE_ALPHABET[idx] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn store() -> CaptchaStore {
        CaptchaStore::new(CaptchaConfig::default())
    }

    async fn issue_with_answer(store: &CaptchaStore) -> (String, String) {
        let issued = store.issue().await;
        // the stored answer equals the rendered challenge, case-folded
        (issued.id, issued.challenge.to_lowercase())
    }

    #[tokio::test]
    async fn test_issue_produces_unique_ids() {
        let store = store();
        let a = store.issue().await;
        let b = store.issue().await;

        assert_ne!(a.id, b.id);
        assert_eq!(store.pending().await, 2);
    }

    #[tokio::test]
    async fn test_correct_answer_verifies_once() {
        let store = store();
        let (id, answer) = issue_with_answer(&store).await;

        assert!(store.verify(&id, &answer).await.unwrap());
        assert_eq!(store.pending().await, 0);
    }

    #[tokio::test]
    async fn test_answer_comparison_is_case_folded() {
        let store = store();
        let (id, answer) = issue_with_answer(&store).await;

        assert!(store.verify(&id, &answer.to_uppercase()).await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_answer_still_consumes_entry() {
        let store = store();
        let (id, _) = issue_with_answer(&store).await;

        assert!(!store.verify(&id, "not-the-answer").await.unwrap());

        // second call on the same id: gone, win or lose
        let result = store.verify(&id, "anything").await;
        assert!(matches!(
            result,
            Err(crate::errors::DomainError::Auth(AuthError::CaptchaNotFound))
        ));
    }

    #[tokio::test]
    async fn test_second_verify_is_not_found_even_after_success() {
        let store = store();
        let (id, answer) = issue_with_answer(&store).await;

        assert!(store.verify(&id, &answer).await.unwrap());

        let result = store.verify(&id, &answer).await;
        assert!(matches!(
            result,
            Err(crate::errors::DomainError::Auth(AuthError::CaptchaNotFound))
        ));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = store();
        let result = store.verify("no-such-id", "abcd").await;
        assert!(matches!(
            result,
            Err(crate::errors::DomainError::Auth(AuthError::CaptchaNotFound))
        ));
    }

    #[tokio::test]
    async fn test_expired_entry_is_reported_and_deleted() {
        let store = store();
        let (id, answer) = issue_with_answer(&store).await;

        {
            let mut entries = store.entries.lock().await;
            entries.get_mut(&id).unwrap().expires_at = Utc::now() - Duration::seconds(1);
        }

        let result = store.verify(&id, &answer).await;
        assert!(matches!(
            result,
            Err(crate::errors::DomainError::Auth(AuthError::CaptchaExpired))
        ));
        assert_eq!(store.pending().await, 0);
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired_entries() {
        let store = store();
        let (expired_id, _) = issue_with_answer(&store).await;
        let (live_id, _) = issue_with_answer(&store).await;

        {
            let mut entries = store.entries.lock().await;
            entries.get_mut(&expired_id).unwrap().expires_at = Utc::now() - Duration::seconds(1);
        }

        assert_eq!(store.sweep().await, 1);
        assert_eq!(store.pending().await, 1);

        let mut entries = store.entries.lock().await;
        assert!(entries.remove(&live_id).is_some());
    }
}
