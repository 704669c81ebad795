//! # Commands Module
//!
//! All commands exposed to the page.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── calculator.rs  ◄─── Field updates, package selection, summary, reset
//! └── config.rs      ◄─── Configuration retrieval and loading
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Page event handler                                                     │
//! │  ──────────────────                                                     │
//! │  input#orders fires "input" with value "-5"                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  update_field(                                                          │
//! │      &session,           ◄── SessionState, injected by the adapter     │
//! │      &config,            ◄── ConfigState, injected by the adapter      │
//! │      "orders",           ◄── field name                                 │
//! │      json!("-5"),        ◄── raw value                                  │
//! │  ) -> Result<SummaryResponse, ApiError>                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Presenter receives SummaryResponse.view                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

pub mod calculator;
pub mod config;
