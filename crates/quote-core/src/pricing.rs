//! # Pricing Engine
//!
//! Derives the itemized summary from a selection and a price table.
//!
//! ```text
//! SelectionState ─┐
//!                 ├──► compute_breakdown ──► PriceBreakdown ──► presenter
//! PriceTable ─────┘      (pure, no I/O)
//! ```
//!
//! Each line is priced independently; the total is their exact sum in cents.

use crate::money::Money;
use crate::state::SelectionState;
use crate::types::{LineItem, LineKind, PriceBreakdown, PriceTable};

/// Label shown for an enabled add-on.
pub const ENABLED_LABEL: &str = "Yes";

/// Computes the price breakdown for a selection.
///
/// Deterministic: the same `(state, table)` always yields an equal breakdown.
///
/// ## Algorithm
/// 1. products   = product_count × unit_product
/// 2. orders     = order_count × unit_order
/// 3. package    = price of the selected tier, or 0 if none / unknown
/// 4. accounting = accounting_fee if enabled, else 0
/// 5. terminal   = terminal_fee if enabled, else 0
/// 6. total      = sum of the five
///
/// ## Example
/// ```rust
/// use quote_core::{compute_breakdown, FieldUpdate, PriceTable, SelectionState};
///
/// let state = SelectionState::new()
///     .with_update(FieldUpdate::Products("4".into()))
///     .with_update(FieldUpdate::Package("basic".into()));
///
/// let breakdown = compute_breakdown(&state, &PriceTable::default());
/// assert_eq!(breakdown.total().to_string(), "$12.00");
/// ```
pub fn compute_breakdown(state: &SelectionState, table: &PriceTable) -> PriceBreakdown {
    PriceBreakdown::from_items([
        count_line(LineKind::Products, state.product_count, table.unit_product),
        count_line(LineKind::Orders, state.order_count, table.unit_order),
        package_line(state, table),
        flag_line(LineKind::Accounting, state.accounting_enabled, table.accounting_fee),
        flag_line(LineKind::Terminal, state.terminal_enabled, table.terminal_fee),
    ])
}

fn count_line(kind: LineKind, count: u32, unit: Money) -> LineItem {
    if count == 0 {
        return LineItem::inactive(kind);
    }

    LineItem {
        kind,
        display_value: count.to_string(),
        amount: unit.multiply_quantity(count),
        active: true,
    }
}

// An unknown key is unlabeled and free, not an error.
fn package_line(state: &SelectionState, table: &PriceTable) -> LineItem {
    let priced = state
        .selected_package
        .as_deref()
        .and_then(|key| table.package_price(key));

    match priced {
        Some((tier, price)) => LineItem {
            kind: LineKind::Package,
            display_value: tier.as_str().to_string(),
            amount: price,
            active: true,
        },
        None => LineItem::inactive(LineKind::Package),
    }
}

fn flag_line(kind: LineKind, enabled: bool, fee: Money) -> LineItem {
    if !enabled {
        return LineItem::inactive(kind);
    }

    LineItem {
        kind,
        display_value: ENABLED_LABEL.to_string(),
        amount: fee,
        active: true,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
