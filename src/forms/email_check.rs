//! Debounced email-uniqueness probe.
//!
//! Each keystroke schedules a fresh check; a later keystroke supersedes any
//! check still waiting out its debounce window. A superseded check reports
//! `Superseded` rather than a stale verdict. Supersession is the only
//! cancellation mechanism; a check that has passed its window always runs
//! to completion.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::sleep;

use crate::store::UserDirectory;

pub const EMAIL_CHECK_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailVerdict {
    Available,
    Taken,
    Superseded,
}

/// Live email check for one open form. In edit mode `exclude_id` exempts
/// the user's own record from matching itself.
pub struct EmailCheck {
    store: Arc<UserDirectory>,
    exclude_id: Option<i64>,
    debounce: Duration,
    generation: Arc<AtomicU64>,
}

impl EmailCheck {
    pub fn new(store: Arc<UserDirectory>, exclude_id: Option<i64>) -> Self {
        Self::with_debounce(store, exclude_id, EMAIL_CHECK_DEBOUNCE)
    }

    pub fn with_debounce(
        store: Arc<UserDirectory>,
        exclude_id: Option<i64>,
        debounce: Duration,
    ) -> Self {
        EmailCheck { store, exclude_id, debounce, generation: Arc::new(AtomicU64::new(0)) }
    }

    /// Schedule a check for `email`. The returned future resolves after the
    /// debounce window, unless a later `schedule` call supersedes it first.
    pub fn schedule(&self, email: String) -> impl Future<Output = EmailVerdict> + use<> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let store = Arc::clone(&self.store);
        let exclude_id = self.exclude_id;
        let debounce = self.debounce;
        async move {
            sleep(debounce).await;
            if generation.load(Ordering::SeqCst) != ticket {
                return EmailVerdict::Superseded;
            }
            if store.email_taken(&email, exclude_id).await {
                EmailVerdict::Taken
            } else {
                EmailVerdict::Available
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::Role;
    use crate::models::user::User;
    use crate::store::MockLatency;

    fn seeded_store() -> Arc<UserDirectory> {
        Arc::new(UserDirectory::new(
            vec![User {
                id: 1,
                first_name: "Ann".to_string(),
                last_name: "Able".to_string(),
                email: "a@x.com".to_string(),
                role: Role::User,
                status: true,
            }],
            MockLatency::none(),
            Role::Admin,
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn later_keystroke_supersedes_the_pending_check() {
        let check = EmailCheck::new(seeded_store(), None);
        let first = check.schedule("a@x.com".to_string());
        let second = check.schedule("b@x.com".to_string());
        assert_eq!(first.await, EmailVerdict::Superseded);
        assert_eq!(second.await, EmailVerdict::Available);
    }

    #[tokio::test(start_paused = true)]
    async fn collision_is_case_insensitive() {
        let check = EmailCheck::new(seeded_store(), None);
        assert_eq!(check.schedule("A@X.com".to_string()).await, EmailVerdict::Taken);
    }

    #[tokio::test(start_paused = true)]
    async fn own_email_is_exempt_in_edit_mode() {
        let check = EmailCheck::new(seeded_store(), Some(1));
        assert_eq!(check.schedule("a@x.com".to_string()).await, EmailVerdict::Available);
    }

    #[tokio::test(start_paused = true)]
    async fn checks_settle_after_the_debounce_window() {
        let check =
            EmailCheck::with_debounce(seeded_store(), None, Duration::from_millis(500));
        let fut = check.schedule("free@x.com".to_string());
        let verdict = tokio::time::timeout(Duration::from_millis(600), fut).await.unwrap();
        assert_eq!(verdict, EmailVerdict::Available);
    }
}
