//! In-memory session registry.
//!
//! Maps session identities to live sessions. The registry itself is not
//! synchronized; a host wraps it in whatever lock its concurrency model
//! needs and serializes mutating calls per session.

use rustc_hash::FxHashMap;

use crate::core::{EngineError, EngineResult};
use crate::session::game::GameSession;

/// All live sessions, keyed by identity.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: FxHashMap<String, GameSession>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Register a session under its own identity, replacing any session
    /// previously held under it.
    pub fn insert(&mut self, session: GameSession) {
        self.sessions.insert(session.id().to_string(), session);
    }

    /// Look up a session.
    pub fn get(&self, id: &str) -> EngineResult<&GameSession> {
        self.sessions
            .get(id)
            .ok_or_else(|| EngineError::GameNotFound(id.to_string()))
    }

    /// Look up a session for mutation.
    pub fn get_mut(&mut self, id: &str) -> EngineResult<&mut GameSession> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| EngineError::GameNotFound(id.to_string()))
    }

    /// Drop a session, returning it.
    pub fn remove(&mut self, id: &str) -> EngineResult<GameSession> {
        self.sessions
            .remove(id)
            .ok_or_else(|| EngineError::GameNotFound(id.to_string()))
    }

    /// Iterate over live sessions in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &GameSession> {
        self.sessions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_insert_and_get() {
        let mut registry = SessionRegistry::new();
        registry.insert(GameSession::new("g1", 1));
        registry.insert(GameSession::new("g2", 2));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("g1").unwrap().id(), "g1");
        assert_eq!(registry.get_mut("g2").unwrap().id(), "g2");
    }

    #[test]
    fn test_missing_session_is_not_found() {
        let mut registry = SessionRegistry::new();

        let err = registry.get("nope").unwrap_err();
        assert_eq!(err, EngineError::GameNotFound("nope".to_string()));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(registry.get_mut("nope").is_err());
        assert!(registry.remove("nope").is_err());
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut registry = SessionRegistry::new();
        registry.insert(GameSession::new("g1", 1));
        registry.insert(GameSession::new("g1", 2));

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut registry = SessionRegistry::new();
        registry.insert(GameSession::new("g1", 1));

        let session = registry.remove("g1").unwrap();
        assert_eq!(session.id(), "g1");
        assert!(registry.is_empty());
    }
}
