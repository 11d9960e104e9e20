//! In-memory page sessions
//!
//! One [`PageState`] per browser page session. The store is bounded; creating
//! a session past the limit evicts the oldest one.

use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::presentation::PageState;

#[derive(Default)]
struct Sessions {
    states: HashMap<Uuid, PageState>,
    /// Creation order, oldest first
    order: VecDeque<Uuid>,
}

pub struct SessionStore {
    inner: RwLock<Sessions>,
    max_sessions: usize,
    multi_country_cap: usize,
}

impl SessionStore {
    #[must_use]
    pub fn new(max_sessions: usize, multi_country_cap: usize) -> Self {
        Self {
            inner: RwLock::new(Sessions::default()),
            max_sessions: max_sessions.max(1),
            multi_country_cap,
        }
    }

    /// Start an empty session
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.inner.write().await;
        while sessions.order.len() >= self.max_sessions {
            if let Some(oldest) = sessions.order.pop_front() {
                sessions.states.remove(&oldest);
                debug!("Evicted page session {oldest}");
            }
        }
        sessions
            .states
            .insert(id, PageState::new(self.multi_country_cap));
        sessions.order.push_back(id);
        id
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.inner.read().await.states.contains_key(&id)
    }

    /// Snapshot of a session's state
    pub async fn get(&self, id: Uuid) -> Option<PageState> {
        self.inner.read().await.states.get(&id).cloned()
    }

    /// Mutate a session in place; `None` when it does not exist (or was evicted)
    pub async fn update<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut PageState) -> R,
    {
        self.inner.write().await.states.get_mut(&id).map(f)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.states.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
