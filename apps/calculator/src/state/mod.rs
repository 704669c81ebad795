//! # State Module
//!
//! Manages calculator state.
//!
//! ## Why Two State Types?
//! Instead of a single `AppState` struct containing everything, the session
//! and the configuration are separate. Commands declare exactly what they
//! need, and the read-only configuration never contends with the lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                        │
//! │          ▼                                     ▼                        │
//! │  ┌──────────────────┐                 ┌──────────────────┐              │
//! │  │  SessionState    │                 │   ConfigState    │              │
//! │  │                  │                 │                  │              │
//! │  │  Arc<Mutex<      │                 │  currency_symbol │              │
//! │  │    Session       │                 │  price_table     │              │
//! │  │  >>              │                 │                  │              │
//! │  └──────────────────┘                 └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState, CURRENCY_SYMBOL_ENV, PRICE_TABLE_ENV};
pub use session::{Session, SessionState};
