//! # Calculator Commands
//!
//! Commands for editing the selection and reading the summary.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────────┐     ┌──────────────┐                 │
//! │  │  Fresh   │────►│   Editing    │────►│   Summary    │                 │
//! │  │ Session  │     │  (any field) │     │  re-rendered │                 │
//! │  └──────────┘     └──────────────┘     └──────────────┘                 │
//! │       ▲                 │  ▲                  │                          │
//! │       │          update_field                 │                          │
//! │       │          select_package ◄─────────────┘                          │
//! │       │                 │                                                │
//! │       └── reset_session ┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command that changes the selection recomputes the breakdown before
//! releasing the session lock.

use chrono::{DateTime, Utc};
use quote_core::{compute_breakdown, Field, FieldUpdate, PriceBreakdown, SelectionState};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ApiError;
use crate::render::SummaryView;
use crate::state::{ConfigState, Session, SessionState};

/// Summary response: the selection, its breakdown, and the view to draw.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    #[ts(as = "String")]
    pub session_id: Uuid,
    /// When the session was created or last reset
    #[ts(as = "String")]
    pub started_at: DateTime<Utc>,
    pub selection: SelectionState,
    pub breakdown: PriceBreakdown,
    pub view: SummaryView,
}

impl SummaryResponse {
    /// Prices the session's current selection.
    pub fn from_session(session: &Session, config: &ConfigState) -> Self {
        let selection = &session.selection;
        let breakdown = compute_breakdown(selection, &config.price_table);
        let view = SummaryView::build(&breakdown, config, selection.selected_package.as_deref());

        SummaryResponse {
            session_id: session.id,
            started_at: session.created_at,
            selection: selection.clone(),
            breakdown,
            view,
        }
    }
}

/// Gets the current summary without changing anything.
///
/// ## When Used
/// - Page load (the summary is drawn once before any input)
/// - Re-drawing after the presenter was detached
pub fn get_summary(session: &SessionState, config: &ConfigState) -> SummaryResponse {
    debug!("get_summary command");
    session.with_session(|s| SummaryResponse::from_session(s, config))
}

/// Applies a typed field update.
///
/// Never fails: the core degrades bad input on its own.
pub fn apply_update(
    session: &SessionState,
    config: &ConfigState,
    update: FieldUpdate,
) -> SummaryResponse {
    debug!(field = %update.field(), "apply_update command");

    session.with_session_mut(|s| {
        s.apply(update);
        SummaryResponse::from_session(s, config)
    })
}

/// Applies an update given as a field name and a raw JSON value.
///
/// ## Value Handling
/// | Field                  | Accepted value      | Anything else        |
/// |------------------------|---------------------|----------------------|
/// | `products`, `orders`   | string or number    | treated as empty → 0 |
/// | `package`              | string, or null     | error                |
/// | `accounting`,`terminal`| boolean             | error                |
///
/// Count fields take whatever the text box produced, matching the core's
/// normalize-to-zero policy. Flags and package keys come from controls that
/// can only produce one kind of value, so anything else is a wiring bug.
///
/// ## Errors
/// `ApiError` with `VALIDATION_ERROR` for an unknown field name or a value of
/// the wrong kind. The session is left untouched.
pub fn update_field(
    session: &SessionState,
    config: &ConfigState,
    field: &str,
    value: Value,
) -> Result<SummaryResponse, ApiError> {
    debug!(field = %field, value = %value, "update_field command");

    let field: Field = field.parse()?;
    let update = field_update(field, value)?;
    Ok(apply_update(session, config, update))
}

/// Selects a package from the dropdown.
///
/// ## Behavior
/// A click that carries no key (the dropdown's padding, a separator) is
/// ignored: the selection is unchanged and the current summary is returned.
pub fn select_package(
    session: &SessionState,
    config: &ConfigState,
    key: Option<&str>,
) -> SummaryResponse {
    match key.filter(|k| !k.is_empty()) {
        Some(key) => {
            debug!(package = %key, "select_package command");
            apply_update(session, config, FieldUpdate::Package(key.to_string()))
        }
        None => {
            debug!("select_package command without a key, ignoring");
            get_summary(session, config)
        }
    }
}

/// Discards every selection and starts a new session.
pub fn reset_session(session: &SessionState, config: &ConfigState) -> SummaryResponse {
    session.with_session_mut(|s| {
        let previous = s.id;
        s.reset();
        info!(%previous, session_id = %s.id, "Session reset");
        SummaryResponse::from_session(s, config)
    })
}

fn field_update(field: Field, value: Value) -> Result<FieldUpdate, ApiError> {
    let wrong_kind = |expected: &str, value: &Value| {
        ApiError::validation(format!("{} expects {}, got {}", field, expected, value))
    };

    match field {
        Field::Products => Ok(FieldUpdate::Products(count_text(value))),
        Field::Orders => Ok(FieldUpdate::Orders(count_text(value))),
        Field::Package => match value {
            Value::String(key) => Ok(FieldUpdate::Package(key)),
            Value::Null => Ok(FieldUpdate::Package(String::new())),
            other => Err(wrong_kind("a package key", &other)),
        },
        Field::Accounting => match value {
            Value::Bool(enabled) => Ok(FieldUpdate::Accounting(enabled)),
            other => Err(wrong_kind("a boolean", &other)),
        },
        Field::Terminal => match value {
            Value::Bool(enabled) => Ok(FieldUpdate::Terminal(enabled)),
            other => Err(wrong_kind("a boolean", &other)),
        },
    }
}

// Numbers go through their text form so 3.9 reads as 3, like typed input.
fn count_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    }
}
