//! # Session State
//!
//! Holds the selection for the active calculator session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` so that an update and the
//! breakdown recomputed from it happen inside one lock scope. A reader can
//! never observe a new selection paired with a stale breakdown.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Form Event              Command                 Session Change         │
//! │  ──────────              ───────                 ──────────────         │
//! │                                                                         │
//! │  Edit a field ─────────► update_field() ───────► selection.update(..)  │
//! │                                                                         │
//! │  Click a package ──────► select_package() ─────► selection.update(..)  │
//! │                                                                         │
//! │  Start over ───────────► reset_session() ──────► new id, defaults      │
//! │                                                                         │
//! │  Page load ────────────► get_summary() ────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use quote_core::{FieldUpdate, SelectionState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user's calculator session.
///
/// Lives only as long as the page; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session identifier (UUID v4), used to correlate log lines
    pub id: Uuid,

    /// The user's current choices
    pub selection: SelectionState,

    /// When the session was created/last reset
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session with default selections.
    pub fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            selection: SelectionState::new(),
            created_at: Utc::now(),
        }
    }

    /// Applies one field change to the selection.
    pub fn apply(&mut self, update: FieldUpdate) -> &SelectionState {
        self.selection.update(update)
    }

    /// Discards all selections and starts a fresh session.
    pub fn reset(&mut self) {
        *self = Session::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared holder for the active session.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>`:
/// - `Arc`: the adapter and its command handlers share one session
/// - `Mutex`: updates run strictly one after another
///
/// A poisoned lock is recovered rather than propagated; the selection is
/// plain data and is valid after any panic.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a new session state with default selections.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust
    /// use quote_calculator::state::SessionState;
    ///
    /// let session = SessionState::new();
    /// let products = session.with_session(|s| s.selection.product_count);
    /// assert_eq!(products, 0);
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
