//! In-memory session fallback cache.
//!
//! When the database is unreachable, conversation state degrades to this
//! per-session cache so a chat request can still complete. Entries hold the
//! selected persona and a bounded tail of the conversation; the bound keeps
//! memory flat when the database stays down for a long time.

use dashmap::DashMap;
use edubuddy_types::chat::Turn;
use edubuddy_types::persona::Persona;
use uuid::Uuid;

/// Maximum number of turns retained per session in the fallback cache.
const FALLBACK_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Default)]
struct SessionEntry {
    persona: Option<Persona>,
    turns: Vec<Turn>,
}

/// Concurrent per-session cache mirroring conversation state.
///
/// Written on every successful repository write as well, so the cache is
/// warm when the database starts failing mid-conversation.
#[derive(Debug, Default)]
pub struct SessionCache {
    sessions: DashMap<Uuid, SessionEntry>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn for a session, dropping the oldest beyond the limit.
    pub fn record_turn(&self, session_id: Uuid, turn: Turn) {
        let mut entry = self.sessions.entry(session_id).or_default();
        entry.turns.push(turn);
        if entry.turns.len() > FALLBACK_HISTORY_LIMIT {
            let excess = entry.turns.len() - FALLBACK_HISTORY_LIMIT;
            entry.turns.drain(..excess);
        }
    }

    /// Replace the cached history for a session with the authoritative tail.
    pub fn replace_history(&self, session_id: Uuid, turns: Vec<Turn>) {
        let mut entry = self.sessions.entry(session_id).or_default();
        let start = turns.len().saturating_sub(FALLBACK_HISTORY_LIMIT);
        entry.turns = turns[start..].to_vec();
    }

    /// Cached history for a session, oldest first.
    pub fn history(&self, session_id: &Uuid) -> Vec<Turn> {
        self.sessions
            .get(session_id)
            .map(|entry| entry.turns.clone())
            .unwrap_or_default()
    }

    /// Cached persona for a session, if one was ever set.
    pub fn persona(&self, session_id: &Uuid) -> Option<Persona> {
        self.sessions.get(session_id).and_then(|entry| entry.persona)
    }

    pub fn set_persona(&self, session_id: Uuid, persona: Option<Persona>) {
        self.sessions.entry(session_id).or_default().persona = persona;
    }

    /// Drop all cached state for a session.
    pub fn clear(&self, session_id: &Uuid) {
        self.sessions.remove(session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edubuddy_types::llm::MessageRole;

    #[test]
    fn test_record_and_history() {
        let cache = SessionCache::new();
        let sid = Uuid::now_v7();
        cache.record_turn(sid, Turn::now(MessageRole::User, "hi"));
        cache.record_turn(sid, Turn::now(MessageRole::Assistant, "hello"));

        let history = cache.history(&sid);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "hi");
        assert_eq!(history[1].content, "hello");
    }

    #[test]
    fn test_history_is_bounded() {
        let cache = SessionCache::new();
        let sid = Uuid::now_v7();
        for i in 0..15 {
            cache.record_turn(sid, Turn::now(MessageRole::User, format!("msg {i}")));
        }

        let history = cache.history(&sid);
        assert_eq!(history.len(), FALLBACK_HISTORY_LIMIT);
        // Oldest entries were dropped
        assert_eq!(history[0].content, "msg 5");
        assert_eq!(history[9].content, "msg 14");
    }

    #[test]
    fn test_replace_history_keeps_tail() {
        let cache = SessionCache::new();
        let sid = Uuid::now_v7();
        let turns: Vec<Turn> = (0..12)
            .map(|i| Turn::now(MessageRole::User, format!("msg {i}")))
            .collect();
        cache.replace_history(sid, turns);

        let history = cache.history(&sid);
        assert_eq!(history.len(), FALLBACK_HISTORY_LIMIT);
        assert_eq!(history[0].content, "msg 2");
    }

    #[test]
    fn test_persona_roundtrip_and_clear() {
        let cache = SessionCache::new();
        let sid = Uuid::now_v7();
        assert!(cache.persona(&sid).is_none());

        cache.set_persona(sid, Some(Persona::Business));
        assert_eq!(cache.persona(&sid), Some(Persona::Business));

        cache.clear(&sid);
        assert!(cache.persona(&sid).is_none());
        assert!(cache.history(&sid).is_empty());
    }

    #[test]
    fn test_unknown_session_is_empty() {
        let cache = SessionCache::new();
        assert!(cache.history(&Uuid::now_v7()).is_empty());
    }
}
