//! USSD menu stepping.
//!
//! Each step appends `:next` to the current menu state. The step count and
//! latest state are kept in the cache so a session can be inspected.

use crate::application::ports::Cache;
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Session keys expire after a typical USSD gateway timeout
const SESSION_TTL: Duration = Duration::from_secs(180);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UssdAction {
    Debit,
    Credit,
    Convert,
    Confirm,
}

#[derive(Debug, Clone)]
pub struct UssdCommand {
    pub session_id: String,
    pub phone: String,
    pub input: String,
    pub menu_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UssdStep {
    pub prompt: String,
    pub next_menu_state: String,
    pub actions: Vec<UssdAction>,
    /// Steps taken in this session, including this one
    pub step: i64,
}

pub struct UssdUseCase<K: Cache + ?Sized> {
    cache: Arc<K>,
}

impl<K: Cache + ?Sized> UssdUseCase<K> {
    pub fn new(cache: Arc<K>) -> Self {
        Self { cache }
    }

    pub async fn execute(&self, command: UssdCommand) -> Result<UssdStep, DomainError> {
        let current = command.menu_state.as_deref().unwrap_or("start");
        let next_menu_state = format!("{}:next", current);
        let prompt = format!("Received input '{}' from {}.", command.input, command.phone);

        let steps_key = format!("ussd:{}:steps", command.session_id);
        let step = self.cache.incr(&steps_key).await?;
        self.cache.expire(&steps_key, SESSION_TTL).await;
        self.cache
            .set(
                &format!("ussd:{}:state", command.session_id),
                &next_menu_state,
                Some(SESSION_TTL),
            )
            .await;

        tracing::debug!(
            session_id = %command.session_id,
            step,
            next_menu_state = %next_menu_state,
            "USSD step"
        );

        Ok(UssdStep {
            prompt,
            next_menu_state,
            actions: vec![UssdAction::Confirm],
            step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryCache;

    fn command(menu_state: Option<&str>) -> UssdCommand {
        UssdCommand {
            session_id: "s1".to_string(),
            phone: "+254700".to_string(),
            input: "1".to_string(),
            menu_state: menu_state.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_step_from_start() {
        let cache = Arc::new(InMemoryCache::new());
        let use_case = UssdUseCase::new(Arc::clone(&cache));

        let step = use_case.execute(command(None)).await.unwrap();

        assert_eq!(step.next_menu_state, "start:next");
        assert_eq!(step.prompt, "Received input '1' from +254700.");
        assert_eq!(step.actions, vec![UssdAction::Confirm]);
        assert_eq!(step.step, 1);
        assert_eq!(cache.get("ussd:s1:state").await.as_deref(), Some("start:next"));
    }

    #[tokio::test]
    async fn test_steps_are_counted_per_session() {
        let cache = Arc::new(InMemoryCache::new());
        let use_case = UssdUseCase::new(cache);

        use_case.execute(command(Some("start"))).await.unwrap();
        let second = use_case.execute(command(Some("start:next"))).await.unwrap();

        assert_eq!(second.step, 2);
        assert_eq!(second.next_menu_state, "start:next:next");
    }

    #[tokio::test]
    async fn test_session_keys_carry_ttl() {
        let cache = Arc::new(InMemoryCache::new());
        let use_case = UssdUseCase::new(Arc::clone(&cache));

        use_case.execute(command(None)).await.unwrap();
        use_case.execute(command(Some("start:next"))).await.unwrap();

        for key in ["ussd:s1:steps", "ussd:s1:state"] {
            let ttl = cache.ttl(key).unwrap();
            assert!(ttl <= SESSION_TTL && ttl > Duration::from_secs(170), "{}", key);
        }
    }

    #[tokio::test]
    async fn test_abandoned_sessions_do_not_accumulate() {
        let cache = Arc::new(InMemoryCache::new());
        let use_case = UssdUseCase::new(Arc::clone(&cache));

        for i in 0..50 {
            let mut cmd = command(None);
            cmd.session_id = format!("s{}", i);
            use_case.execute(cmd).await.unwrap();
        }
        assert_eq!(cache.len(), 100);

        for i in 0..50 {
            cache.expire(&format!("ussd:s{}:steps", i), Duration::ZERO).await;
            cache.expire(&format!("ussd:s{}:state", i), Duration::ZERO).await;
        }

        assert_eq!(cache.purge_expired(), 100);
        assert!(cache.is_empty());
    }
}
