//! # Summary Rendering
//!
//! Turns a `PriceBreakdown` into what the summary panel shows, and defines
//! the seam a concrete UI plugs into.
//!
//! ```text
//! PriceBreakdown ──► SummaryView::build ──► Presenter::render
//!   (all 5 items,      (active rows only,      (DOM, terminal,
//!    raw cents)         formatted strings)      test recorder)
//! ```
//!
//! The presenter never sees the selection or the price table.

use quote_core::{LineKind, PriceBreakdown};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::state::ConfigState;

/// One visible summary row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    /// Row id (`products`, `orders`, ...)
    pub id: LineKind,
    /// The middle column: count, tier key or "Yes"
    pub calc: String,
    /// Formatted line amount, e.g. `$2.00`
    pub price: String,
}

/// Render-ready summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    /// Active rows in display order; inactive rows are omitted
    pub rows: Vec<SummaryRow>,
    /// Formatted total, always two decimals
    pub total: String,
    /// Text for the package dropdown header, if something was picked
    pub package_label: Option<String>,
}

impl SummaryView {
    /// Builds the view from a breakdown.
    ///
    /// `package_label` is the raw selected key, shown in the dropdown header
    /// even when it does not price.
    pub fn build(
        breakdown: &PriceBreakdown,
        config: &ConfigState,
        package_label: Option<&str>,
    ) -> Self {
        let rows = breakdown
            .active_items()
            .map(|item| SummaryRow {
                id: item.kind,
                calc: item.display_value.clone(),
                price: config.format_currency(item.amount),
            })
            .collect();

        SummaryView {
            rows,
            total: config.format_currency(breakdown.total()),
            package_label: package_label.map(str::to_string),
        }
    }

    /// Whether the row of the given kind is shown.
    pub fn shows(&self, kind: LineKind) -> bool {
        self.rows.iter().any(|row| row.id == kind)
    }
}

/// Draws a summary somewhere.
///
/// Called once after every state change with the fresh view.
pub trait Presenter {
    fn render(&mut self, view: &SummaryView);
}

/// Presenter that renders the summary as plain text lines.
///
/// ```text
/// products     4      $2.00
/// package      basic  $10.00
/// total               $12.00
/// ```
#[derive(Debug, Default)]
pub struct TextPresenter {
    output: String,
    renders: usize,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent rendering.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// How many times `render` has been called.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl Presenter for TextPresenter {
    fn render(&mut self, view: &SummaryView) {
        let mut lines: Vec<String> = view
            .rows
            .iter()
            .map(|row| format!("{:<12} {:<12} {}", row.id.as_str(), row.calc, row.price))
            .collect();
        lines.push(format!("{:<12} {:<12} {}", "total", "", view.total));

        self.output = lines.join("\n");
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::{compute_breakdown, FieldUpdate, PriceTable, SelectionState};

    fn view_for(state: &SelectionState) -> SummaryView {
        let config = ConfigState::default();
        let breakdown = compute_breakdown(state, &config.price_table);
        SummaryView::build(&breakdown, &config, state.selected_package.as_deref())
    }

    #[test]
    fn test_empty_view() {
        let view = view_for(&SelectionState::new());
        assert!(view.rows.is_empty());
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.package_label, None);
    }

    #[test]
    fn test_view_keeps_only_active_rows() {
        let state = SelectionState::new()
            .with_update(FieldUpdate::Orders("2".to_string()))
            .with_update(FieldUpdate::Terminal(true));
        let view = view_for(&state);

        assert_eq!(
            view.rows,
            vec![
                SummaryRow {
                    id: LineKind::Orders,
                    calc: "2".to_string(),
                    price: "$1.00".to_string(),
                },
                SummaryRow {
                    id: LineKind::Terminal,
                    calc: "Yes".to_string(),
                    price: "$10.00".to_string(),
                },
            ]
        );
        assert_eq!(view.total, "$11.00");
        assert!(!view.shows(LineKind::Products));
    }

    #[test]
    fn test_unknown_package_labels_header_but_hides_row() {
        let state = SelectionState::new().with_update(FieldUpdate::Package("deluxe".to_string()));
        let view = view_for(&state);

        assert_eq!(view.package_label.as_deref(), Some("deluxe"));
        assert!(!view.shows(LineKind::Package));
    }

    #[test]
    fn test_text_presenter() {
        let state = SelectionState::new()
            .with_update(FieldUpdate::Products("4".to_string()))
            .with_update(FieldUpdate::Package("basic".to_string()));
        let config = ConfigState::default();
        let breakdown = compute_breakdown(&state, &PriceTable::default());
        let view = SummaryView::build(&breakdown, &config, Some("basic"));

        let mut presenter = TextPresenter::new();
        presenter.render(&view);

        let lines: Vec<&str> = presenter.output().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("products"));
        assert!(lines[0].ends_with("$2.00"));
        assert!(lines[1].contains("basic"));
        assert!(lines[2].starts_with("total"));
        assert!(lines[2].ends_with("$12.00"));
        assert_eq!(presenter.render_count(), 1);
    }
}
