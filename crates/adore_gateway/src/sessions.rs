use adore_core::SessionState;
use lru::LruCache;
use std::num::NonZeroUsize;
use uuid::Uuid;

/// Bounded in-memory map of per-browser session state.
///
/// Inserting past `max_sessions` evicts the least recently touched session.
#[derive(Debug)]
pub struct SessionStore {
    entries: LruCache<Uuid, SessionState>,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        let cap = NonZeroUsize::new(max_sessions).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
        }
    }

    /// Snapshot of a session's state; unknown ids get an empty state.
    pub fn get(&mut self, id: &Uuid) -> SessionState {
        self.entries.get(id).cloned().unwrap_or_default()
    }

    pub fn put(&mut self, id: Uuid, state: SessionState) {
        if let Some((evicted, _)) = self.entries.push(id, state) {
            if evicted != id {
                tracing::debug!("Evicting session {}", evicted);
            }
        }
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.entries.contains(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
