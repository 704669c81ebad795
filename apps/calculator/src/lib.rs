//! # Calculator Adapter Library
//!
//! The presentation-side adapter for the bundle calculator. It owns the
//! session, the configuration and the presenter, and calls into the pure
//! `quote-core` crate for every price.
//!
//! ## Module Organization
//! ```text
//! quote_calculator/
//! ├── lib.rs          ◄─── You are here (exports, logging setup)
//! ├── calculator.rs   ◄─── Calculator: events → commands → presenter
//! ├── render.rs       ◄─── SummaryView, Presenter trait, TextPresenter
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session selection behind a Mutex
//! │   └── config.rs   ◄─── Currency symbol and price table
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── calculator.rs ◄─ Field updates, package clicks, summary, reset
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Calculator Startup                                │
//! │                                                                         │
//! │  Calculator::start(presenter) runs steps 1 to 3:                        │
//! │  1. init_tracing() ─── RUST_LOG or the calculator default filter        │
//! │  2. ConfigState::from_env() ─── price table file, currency symbol       │
//! │  3. Calculator::new(config, presenter)                                  │
//! │       • fresh SessionState (new UUID, default selections)               │
//! │       • initial summary rendered once                                   │
//! │  4. Page handlers forward InputEvents to Calculator::handle             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use quote_calculator::{Calculator, ConfigState, InputEvent, TextPresenter};
//!
//! let mut calculator = Calculator::new(ConfigState::default(), TextPresenter::new());
//! calculator.handle(InputEvent::ProductsInput("4".into()));
//! let summary = calculator.handle(InputEvent::PackageClicked(Some("basic".into())));
//!
//! assert_eq!(summary.view.total, "$12.00");
//! assert_eq!(calculator.presenter().render_count(), 3);
//! ```

pub mod calculator;
pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use calculator::{Calculator, InputEvent};
pub use commands::calculator::SummaryResponse;
pub use error::{ApiError, ErrorCode};
pub use render::{Presenter, SummaryRow, SummaryView, TextPresenter};
pub use state::{ConfigState, SessionState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=quote_calculator=trace` - Trace this crate only
/// - Default: INFO, DEBUG for the calculator crates
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quote_calculator=debug,quote_core=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
