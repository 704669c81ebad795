//! End-to-end flows through the calculator adapter: input events in,
//! rendered summaries out.

use quote_calculator::{
    Calculator, ConfigState, ErrorCode, InputEvent, Presenter, SummaryView, TextPresenter,
};
use quote_core::{LineKind, SelectionState};
use serde_json::json;

/// Keeps every view it was asked to render.
#[derive(Debug, Default)]
struct RecordingPresenter {
    views: Vec<SummaryView>,
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &SummaryView) {
        self.views.push(view.clone());
    }
}

fn calculator() -> Calculator<RecordingPresenter> {
    Calculator::new(ConfigState::default(), RecordingPresenter::default())
}

#[test]
fn initial_summary_is_rendered_empty() {
    let calc = calculator();

    let views = &calc.presenter().views;
    assert_eq!(views.len(), 1);
    assert!(views[0].rows.is_empty());
    assert_eq!(views[0].total, "$0.00");
}

#[test]
fn start_sets_up_logging_and_draws_once() {
    let calc = Calculator::start(RecordingPresenter::default());

    let views = &calc.presenter().views;
    assert_eq!(views.len(), 1);
    assert!(views[0].rows.is_empty());
    assert_eq!(calc.summary().selection, SelectionState::new());
}

#[test]
fn full_selection_totals_twenty_three() {
    let mut calc = calculator();

    calc.handle(InputEvent::ProductsInput("4".to_string()));
    calc.handle(InputEvent::OrdersInput("2".to_string()));
    calc.handle(InputEvent::PackageClicked(Some("basic".to_string())));
    let summary = calc.handle(InputEvent::AccountingToggled(true));

    let breakdown = &summary.breakdown;
    assert_eq!(breakdown.item(LineKind::Products).amount.cents(), 200);
    assert_eq!(breakdown.item(LineKind::Orders).amount.cents(), 100);
    assert_eq!(breakdown.item(LineKind::Package).amount.cents(), 1000);
    assert_eq!(breakdown.item(LineKind::Accounting).amount.cents(), 1000);
    assert_eq!(breakdown.item(LineKind::Terminal).amount.cents(), 0);

    let view = &summary.view;
    assert_eq!(view.total, "$23.00");
    assert_eq!(view.rows.len(), 4);
    assert!(!view.shows(LineKind::Terminal));
    assert_eq!(view.package_label.as_deref(), Some("basic"));

    // One render per event, plus the initial one
    assert_eq!(calc.presenter().views.len(), 5);
    assert_eq!(calc.presenter().views.last(), Some(view));
}

#[test]
fn unknown_package_is_free_and_hidden() {
    let mut calc = calculator();

    let summary = calc.handle(InputEvent::PackageClicked(Some("deluxe".to_string())));

    assert_eq!(summary.selection.selected_package.as_deref(), Some("deluxe"));
    assert!(!summary.breakdown.item(LineKind::Package).active);
    assert!(summary.breakdown.total().is_zero());
    assert!(!summary.view.shows(LineKind::Package));
}

#[test]
fn negative_orders_reset_to_zero() {
    let mut calc = calculator();

    calc.handle(InputEvent::OrdersInput("6".to_string()));
    let summary = calc.handle(InputEvent::OrdersInput("-5".to_string()));

    assert_eq!(summary.selection.order_count, 0);
    assert!(!summary.view.shows(LineKind::Orders));
}

#[test]
fn repeating_an_update_changes_nothing() {
    let mut calc = calculator();

    let first = calc.handle(InputEvent::ProductsInput("5".to_string()));
    let second = calc.handle(InputEvent::ProductsInput("5".to_string()));

    assert_eq!(first.selection, second.selection);
    assert_eq!(first.breakdown, second.breakdown);
    assert_eq!(first.view, second.view);
}

#[test]
fn summary_never_lags_the_selection() {
    let mut calc = calculator();

    for count in ["1", "abc", "7", "", "3"] {
        let summary = calc.handle(InputEvent::ProductsInput(count.to_string()));
        let expected = i64::from(summary.selection.product_count) * 50;
        assert_eq!(summary.breakdown.item(LineKind::Products).amount.cents(), expected);
        assert_eq!(calc.summary().breakdown, summary.breakdown);
    }
}

#[test]
fn empty_dropdown_click_keeps_selection() {
    let mut calc = calculator();

    calc.handle(InputEvent::PackageClicked(Some("premium".to_string())));
    let renders = calc.presenter().views.len();

    let summary = calc.handle(InputEvent::PackageClicked(None));
    assert_eq!(summary.selection.selected_package.as_deref(), Some("premium"));
    assert_eq!(summary.view.total, "$30.00");

    calc.handle(InputEvent::PackageClicked(Some(String::new())));

    // Nothing changed, so nothing was drawn
    assert_eq!(calc.presenter().views.len(), renders);
}

#[test]
fn raw_updates_go_through_the_same_path() {
    let mut calc = calculator();

    calc.handle_raw("terminal", json!(true)).unwrap();
    let summary = calc.handle_raw("orders", json!("3")).unwrap();

    assert!(summary.selection.terminal_enabled);
    assert_eq!(summary.view.total, "$11.50");
}

#[test]
fn rejected_raw_update_renders_nothing() {
    let mut calc = calculator();
    let renders = calc.presenter().views.len();

    let err = calc.handle_raw("terminal", json!("on")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);

    let err = calc.handle_raw("discount", json!(5)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);

    assert_eq!(calc.presenter().views.len(), renders);
    assert_eq!(calc.summary().selection, SelectionState::new());
}

#[test]
fn reset_starts_a_new_session() {
    let mut calc = calculator();

    let before = calc.handle(InputEvent::TerminalToggled(true));
    let after = calc.handle(InputEvent::Reset);

    assert_ne!(before.session_id, after.session_id);
    assert_eq!(after.selection, SelectionState::new());
    assert_eq!(after.view.total, "$0.00");
}

#[test]
fn configured_prices_and_symbol_flow_to_the_view() {
    let config = ConfigState::from_toml_str(
        r#"
        currency_symbol = "€"

        [prices]
        unit_order = "1.25"

        [prices.packages]
        basic = "12"
        "#,
    )
    .unwrap();
    let mut calc = Calculator::new(config, TextPresenter::new());
    assert_eq!(calc.config().currency_symbol, "€");

    calc.handle(InputEvent::OrdersInput("4".to_string()));
    let summary = calc.handle(InputEvent::PackageClicked(Some("basic".to_string())));

    assert_eq!(summary.view.total, "€17.00");
    assert!(calc.presenter().output().ends_with("€17.00"));

    // professional is not in this table
    let summary = calc.handle(InputEvent::PackageClicked(Some("professional".to_string())));
    assert!(!summary.view.shows(LineKind::Package));
    assert_eq!(summary.view.total, "€5.00");
}

#[test]
fn summary_response_serializes_for_the_page() {
    let mut calc = calculator();
    let summary = calc.handle(InputEvent::AccountingToggled(true));

    let json = serde_json::to_value(&summary).unwrap();
    assert!(json["sessionId"].is_string());
    assert!(json["startedAt"].is_string());
    assert_eq!(json["selection"]["accountingEnabled"], true);
    assert_eq!(json["breakdown"]["total"], 1000);
    assert_eq!(json["view"]["rows"][0]["id"], "accounting");
    assert_eq!(json["view"]["rows"][0]["calc"], "Yes");
    assert_eq!(json["view"]["total"], "$10.00");
}
