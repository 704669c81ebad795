//! # Calculator Adapter
//!
//! Binds one session, one configuration and one presenter together.
//!
//! The page's event handlers translate DOM events into [`InputEvent`]s and
//! hand them to [`Calculator::handle`]. Each event runs to completion
//! (update, recompute, render) before the next one is accepted; `handle`
//! takes `&mut self`, so the borrow checker enforces the ordering.

use quote_core::FieldUpdate;
use serde_json::Value;
use tracing::info;

use crate::commands::calculator::{self as commands, SummaryResponse};
use crate::error::ApiError;
use crate::init_tracing;
use crate::render::Presenter;
use crate::state::{ConfigState, SessionState};

/// A user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Text typed into the products field
    ProductsInput(String),
    /// Text typed into the orders field
    OrdersInput(String),
    /// Click inside the package dropdown; `None` when the click hit no option
    PackageClicked(Option<String>),
    /// Accounting checkbox changed
    AccountingToggled(bool),
    /// Terminal checkbox changed
    TerminalToggled(bool),
    /// "Start over"
    Reset,
}

/// The calculator wired to a presenter.
pub struct Calculator<P> {
    session: SessionState,
    config: ConfigState,
    presenter: P,
}

impl<P: Presenter> Calculator<P> {
    /// Page startup: logging, configuration from the environment, then the
    /// initial summary.
    pub fn start(presenter: P) -> Self {
        init_tracing();
        Calculator::new(ConfigState::from_env(), presenter)
    }

    /// Creates a calculator and draws the initial (empty) summary.
    pub fn new(config: ConfigState, presenter: P) -> Self {
        Calculator::with_session(SessionState::new(), config, presenter)
    }

    /// Creates a calculator over an existing session holder.
    pub fn with_session(session: SessionState, config: ConfigState, presenter: P) -> Self {
        let mut calculator = Calculator {
            session,
            config,
            presenter,
        };

        let summary = commands::get_summary(&calculator.session, &calculator.config);
        info!(session_id = %summary.session_id, "Calculator session started");
        calculator.presenter.render(&summary.view);
        calculator
    }

    /// Handles one input event and re-renders the summary.
    ///
    /// A dropdown click that hit no option changes nothing and draws nothing.
    pub fn handle(&mut self, event: InputEvent) -> SummaryResponse {
        let redraw = !matches!(
            &event,
            InputEvent::PackageClicked(key) if key.as_deref().map_or(true, str::is_empty)
        );

        let summary = match event {
            InputEvent::ProductsInput(raw) => self.apply(FieldUpdate::Products(raw)),
            InputEvent::OrdersInput(raw) => self.apply(FieldUpdate::Orders(raw)),
            InputEvent::PackageClicked(key) => {
                commands::select_package(&self.session, &self.config, key.as_deref())
            }
            InputEvent::AccountingToggled(enabled) => self.apply(FieldUpdate::Accounting(enabled)),
            InputEvent::TerminalToggled(enabled) => self.apply(FieldUpdate::Terminal(enabled)),
            InputEvent::Reset => commands::reset_session(&self.session, &self.config),
        };

        if redraw {
            self.presenter.render(&summary.view);
        }
        summary
    }

    /// Handles an update given as a field name and raw JSON value.
    ///
    /// Nothing is rendered when the input is rejected.
    pub fn handle_raw(&mut self, field: &str, value: Value) -> Result<SummaryResponse, ApiError> {
        let summary = commands::update_field(&self.session, &self.config, field, value)?;
        self.presenter.render(&summary.view);
        Ok(summary)
    }

    /// The current summary, without re-rendering.
    pub fn summary(&self) -> SummaryResponse {
        commands::get_summary(&self.session, &self.config)
    }

    /// The configuration this calculator prices with.
    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn apply(&self, update: FieldUpdate) -> SummaryResponse {
        commands::apply_update(&self.session, &self.config, update)
    }
}
