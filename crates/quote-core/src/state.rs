//! # Selection State
//!
//! The user's current choices: the single source of truth for pricing.
//!
//! ## Update Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Updates                                    │
//! │                                                                         │
//! │  Form Event               FieldUpdate                  State Change     │
//! │  ──────────               ───────────                  ────────────     │
//! │                                                                         │
//! │  Type in products ──────► Products("12") ────────────► product_count   │
//! │                                                         = normalize     │
//! │  Type in orders ────────► Orders("-5") ──────────────► order_count = 0 │
//! │                                                                         │
//! │  Click package ─────────► Package("basic") ──────────► selected_package│
//! │                                                                         │
//! │  Toggle accounting ─────► Accounting(true) ──────────► flag            │
//! │  Toggle terminal ───────► Terminal(false) ───────────► flag            │
//! │                                                                         │
//! │  Each update touches exactly one field and never fails.                 │
//! │  Recomputing the breakdown is the caller's next step.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::PackageTier;
use crate::validation::normalize_count;

// =============================================================================
// Fields
// =============================================================================

/// The five editable fields of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Products,
    Orders,
    Package,
    Accounting,
    Terminal,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Products,
        Field::Orders,
        Field::Package,
        Field::Accounting,
        Field::Terminal,
    ];

    /// Name used by form controls.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Products => "products",
            Field::Orders => "orders",
            Field::Package => "package",
            Field::Accounting => "accounting",
            Field::Terminal => "terminal",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "field".to_string(),
                allowed: Field::ALL.iter().map(|f| f.as_str().to_string()).collect(),
            })
    }
}

/// A single-field change, carrying the raw value from the form.
///
/// Counts arrive as unvalidated text and are normalized on apply. Flags are
/// already booleans. Package keys are taken verbatim.
///
/// ## Wire Format
/// ```json
/// { "field": "products", "value": "12" }
/// { "field": "accounting", "value": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    Products(String),
    Orders(String),
    Package(String),
    Accounting(bool),
    Terminal(bool),
}

impl FieldUpdate {
    /// The field this update targets.
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Products(_) => Field::Products,
            FieldUpdate::Orders(_) => Field::Orders,
            FieldUpdate::Package(_) => Field::Package,
            FieldUpdate::Accounting(_) => Field::Accounting,
            FieldUpdate::Terminal(_) => Field::Terminal,
        }
    }
}

// =============================================================================
// Selection State
// =============================================================================

/// Everything the user has chosen in one session.
///
/// ## Invariants
/// - Counts are non-negative integers (enforced by the type)
/// - `selected_package` is never `Some("")`; an empty key clears it
///
/// `selected_package` holds the key as given. It may name no known tier;
/// such a key prices as zero downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub product_count: u32,
    pub order_count: u32,
    pub selected_package: Option<String>,
    pub accounting_enabled: bool,
    pub terminal_enabled: bool,
}

impl SelectionState {
    /// Creates the session-start state: zero counts, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one field change in place and returns the new state.
    ///
    /// Never fails. Bad count text becomes 0, see
    /// [`crate::validation::normalize_count`].
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::{FieldUpdate, SelectionState};
    ///
    /// let mut state = SelectionState::new();
    /// state.update(FieldUpdate::Orders("-5".into()));
    /// assert_eq!(state.order_count, 0);
    ///
    /// let state = state.update(FieldUpdate::Products("4".into()));
    /// assert_eq!(state.product_count, 4);
    /// ```
    pub fn update(&mut self, update: FieldUpdate) -> &SelectionState {
        match update {
            FieldUpdate::Products(raw) => self.product_count = normalize_count(&raw),
            FieldUpdate::Orders(raw) => self.order_count = normalize_count(&raw),
            FieldUpdate::Package(key) => {
                self.selected_package = if key.is_empty() { None } else { Some(key) };
            }
            FieldUpdate::Accounting(enabled) => self.accounting_enabled = enabled,
            FieldUpdate::Terminal(enabled) => self.terminal_enabled = enabled,
        }
        self
    }

    /// Owned variant of [`SelectionState::update`].
    pub fn with_update(mut self, update: FieldUpdate) -> SelectionState {
        self.update(update);
        self
    }

    /// The selected tier, when the stored key names one.
    pub fn package_tier(&self) -> Option<PackageTier> {
        self.selected_package.as_deref()?.parse().ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
