//! # Autoquote App
//!
//! The presentation side of the quote calculator: two tabs, each with a
//! form and a result screen.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 reduce(state, action)                │
//! │  ┌──────────────────────┐  ┌──────────────────────┐  │
//! │  │   New Quote branch   │  │    Lookup branch     │  │
//! │  │  ApplicantForm ──▶   │  │  shaped id input ──▶ │  │
//! │  │   quote_applicant    │  │     find_quote       │  │
//! │  └──────────┬───────────┘  └──────────┬───────────┘  │
//! │             │                         │              │
//! │  ┌──────────┴──────────┐   ┌──────────┴───────────┐  │
//! │  │  QuoteIdGenerator   │   │    QuoteDirectory    │  │
//! │  │     (injected)      │   │     (read-only)      │  │
//! │  └─────────────────────┘   └──────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod form;
pub mod session;
pub mod state;
pub mod view;

pub use config::AppConfig;
pub use form::{ApplicantForm, FormField};
pub use session::{parse_command, run_session, Command, CommandError};
pub use state::{reduce, Action, AppState, LookupState, NewQuoteState, QuoteEnv, Screen, Tab};
pub use view::{render, render_quote};
