//! In-memory dashboard sessions.
//!
//! Sessions expire after a period without requests. Every successful
//! lookup or event restamps the session; expired sessions are dropped
//! lazily on access and in bulk whenever a new session is created.

use chrono::{DateTime, TimeDelta, Utc};
use quake_map_cache::TtlCache;
use quake_map_dashboard::{DashboardEvent, SelectionState, reduce};
use thiserror::Error;
use uuid::Uuid;

/// Default idle time after which a session is forgotten, in minutes.
pub const DEFAULT_SESSION_IDLE_MINUTES: i64 = 60;

/// Why an event could not be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No live session with this ID exists.
    #[error("Session {0} not found")]
    NotFound(Uuid),

    /// A year click was made against an outdated bar chart.
    #[error("Stale selection version {sent} (current is {current})")]
    Stale {
        /// Version sent by the client.
        sent: u64,
        /// Version held by the session.
        current: u64,
    },
}

/// Independent selection state per browser session.
#[derive(Debug)]
pub struct SessionStore {
    sessions: TtlCache<Uuid, SelectionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(TimeDelta::minutes(DEFAULT_SESSION_IDLE_MINUTES))
    }
}

impl SessionStore {
    /// Creates a store whose sessions expire after `idle` without use.
    #[must_use]
    pub const fn new(idle: TimeDelta) -> Self {
        Self {
            sessions: TtlCache::with_ttl(idle),
        }
    }

    /// Creates a session with the default selection.
    pub fn create(&self) -> (Uuid, SelectionState) {
        self.create_at(Utc::now())
    }

    /// Creates a session at `now`, first dropping every expired one.
    pub fn create_at(&self, now: DateTime<Utc>) -> (Uuid, SelectionState) {
        self.sessions.purge_expired_at(now);

        let id = Uuid::new_v4();
        let state = SelectionState::default();
        self.sessions.insert_at(id, state.clone(), now);
        log::debug!("Created session {id} ({} live)", self.sessions.len());
        (id, state)
    }

    /// Current selection of session `id`.
    pub fn get(&self, id: Uuid) -> Option<SelectionState> {
        self.get_at(id, Utc::now())
    }

    /// Current selection of session `id` at `now`, keeping it alive.
    pub fn get_at(&self, id: Uuid, now: DateTime<Utc>) -> Option<SelectionState> {
        self.sessions.update_at(&id, now, |state| state.clone())
    }

    /// Applies `event` to session `id` and returns the new selection.
    ///
    /// # Errors
    ///
    /// * [`SessionError::NotFound`] for an unknown or expired session
    /// * [`SessionError::Stale`] if `event` selects a year and `version` is
    ///   older than the session's
    pub fn apply(
        &self,
        id: Uuid,
        version: Option<u64>,
        event: DashboardEvent,
    ) -> Result<SelectionState, SessionError> {
        self.apply_at(id, version, event, Utc::now())
    }

    /// [`Self::apply`] at `now`.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn apply_at(
        &self,
        id: Uuid,
        version: Option<u64>,
        event: DashboardEvent,
        now: DateTime<Utc>,
    ) -> Result<SelectionState, SessionError> {
        self.sessions
            .update_at(&id, now, |state| {
                if let (DashboardEvent::SelectYear { .. }, Some(sent)) = (&event, version)
                    && state.is_stale(sent)
                {
                    return Err(SessionError::Stale {
                        sent,
                        current: state.version,
                    });
                }

                *state = reduce(state.clone(), event);
                Ok(state.clone())
            })
            .ok_or(SessionError::NotFound(id))?
    }

    /// Ends session `id`, returning whether it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        self.sessions.invalidate(&id)
    }

    /// Number of stored sessions, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether there are no stored sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(minutes: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::minutes(minutes)
    }

    fn store() -> SessionStore {
        SessionStore::new(TimeDelta::minutes(30))
    }

    #[test]
    fn sessions_are_independent() {
        let store = SessionStore::default();
        let (a, _) = store.create();
        let (b, _) = store.create();

        store
            .apply(a, None, DashboardEvent::SelectYear { year: 2017 })
            .unwrap();

        assert_eq!(store.get(a).unwrap().selected_year, Some(2017));
        assert_eq!(store.get(b).unwrap().selected_year, None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_session() {
        let store = SessionStore::default();
        let id = Uuid::new_v4();
        assert_eq!(
            store.apply(id, None, DashboardEvent::ShowAllYears),
            Err(SessionError::NotFound(id))
        );
    }

    #[test]
    fn stale_year_click_is_rejected() {
        let store = SessionStore::default();
        let (id, _) = store.create();
        store.apply(id, Some(0), DashboardEvent::ShowAllYears).unwrap();

        let err = store
            .apply(id, Some(0), DashboardEvent::SelectYear { year: 2020 })
            .unwrap_err();
        assert_eq!(err, SessionError::Stale { sent: 0, current: 1 });
        assert_eq!(store.get(id).unwrap().selected_year, None);

        let state = store
            .apply(id, Some(1), DashboardEvent::SelectYear { year: 2020 })
            .unwrap();
        assert_eq!(state.selected_year, Some(2020));
    }

    #[test]
    fn old_version_still_changes_region() {
        let store = SessionStore::default();
        let (id, _) = store.create();
        store.apply(id, None, DashboardEvent::ShowAllYears).unwrap();
        let state = store
            .apply(
                id,
                Some(0),
                DashboardEvent::SelectRegion {
                    region: "Italy".to_string(),
                },
            )
            .unwrap();
        assert_eq!(state.selected_region, "Italy");
    }

    #[test]
    fn idle_sessions_expire() {
        let store = store();
        let (id, _) = store.create_at(at(0));
        assert!(store.get_at(id, at(29)).is_some());
        // The lookup at 0:29 kept it alive until 0:59.
        assert!(store.get_at(id, at(58)).is_some());
        assert_eq!(store.get_at(id, at(200)), None);
        assert_eq!(
            store.apply_at(id, None, DashboardEvent::ShowAllYears, at(200)),
            Err(SessionError::NotFound(id))
        );
    }

    #[test]
    fn events_keep_sessions_alive() {
        let store = store();
        let (id, _) = store.create_at(at(0));
        store
            .apply_at(id, None, DashboardEvent::ShowAllYears, at(25))
            .unwrap();
        assert!(store.get_at(id, at(50)).is_some());
    }

    #[test]
    fn creating_purges_expired_sessions() {
        let store = store();
        for _ in 0..1_000 {
            store.create_at(at(0));
        }
        assert_eq!(store.len(), 1_000);

        let (fresh, _) = store.create_at(at(31));
        assert_eq!(store.len(), 1);
        assert!(store.get_at(fresh, at(31)).is_some());
    }

    #[test]
    fn removed_session_is_gone() {
        let store = SessionStore::default();
        let (id, _) = store.create();
        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert_eq!(store.get(id), None);
        assert!(store.is_empty());
    }
}
