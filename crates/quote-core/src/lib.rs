//! # quote-core: Pure Pricing Logic for the Bundle Calculator
//!
//! This crate is the **heart** of the calculator. It holds the selection
//! state, the price table and the pricing function, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Calculator Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Page (form + summary)                        │   │
//! │  │    Counts ──► Package dropdown ──► Add-on checkboxes            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw input events                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    quote-calculator (adapter)                   │   │
//! │  │    update_field, select_package, get_summary, Presenter         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quote-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   state   │  │  pricing  │  │   types   │  │   money   │  │   │
//! │  │   │ Selection │  │ compute_  │  │PriceTable │  │   Money   │  │   │
//! │  │   │  update   │  │ breakdown │  │ Breakdown │  │  (cents)  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO GLOBALS • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`] - `SelectionState` and the single-field update protocol
//! - [`pricing`] - `compute_breakdown`, the pure pricing function
//! - [`types`] - `PriceTable`, `PackageTier`, `PriceBreakdown`, `LineItem`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`validation`] - count normalization and price checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same selection + same table = same breakdown
//! 2. **Graceful Degradation**: user input never produces an error
//! 3. **Integer Money**: all amounts are cents, the total is an exact sum
//! 4. **Explicit Dependencies**: callers pass state and table in; nothing is global
//!
//! ## Example Usage
//!
//! ```rust
//! use quote_core::{compute_breakdown, FieldUpdate, LineKind, PriceTable, SelectionState};
//!
//! let table = PriceTable::default();
//! let mut state = SelectionState::new();
//!
//! state.update(FieldUpdate::Products("4".into()));
//! state.update(FieldUpdate::Orders("2".into()));
//! state.update(FieldUpdate::Package("basic".into()));
//! state.update(FieldUpdate::Accounting(true));
//!
//! let breakdown = compute_breakdown(&state, &table);
//! assert_eq!(breakdown.item(LineKind::Products).amount.to_string(), "$2.00");
//! assert_eq!(breakdown.total().to_string(), "$23.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod state;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::compute_breakdown;
pub use state::{Field, FieldUpdate, SelectionState};
pub use types::*;
