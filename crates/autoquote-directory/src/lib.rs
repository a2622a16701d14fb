//! # Autoquote Directory
//!
//! Lookup of previously issued quotes.
//!
//! The directory is a fixed table built once at startup and only ever read
//! afterwards, so it can be shared by plain reference. A lookup validates
//! the candidate id before touching the table:
//!
//! ```text
//! raw id ──▶ validate ──▶ Invalid(format error)
//!               │
//!               ▼
//!          directory ──▶ Found(quote) | NotFound
//! ```

pub mod directory;
pub mod lookup;

pub use directory::QuoteDirectory;
pub use lookup::find_quote;
