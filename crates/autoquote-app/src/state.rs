//! Application state and reducer
//!
//! `AppState` is a plain value. Every user action goes through
//! [`reduce`], which consumes the old state and returns the next one. The
//! only outside inputs are the quote directory and the quote-number
//! generator, both handed in through [`QuoteEnv`].

use autoquote_common::{normalize_quote_id_input, FormError, LookupError, Quote, QUOTE_ID_LEN};
use autoquote_directory::{find_quote, QuoteDirectory};
use autoquote_pricing::{quote_applicant, QuoteIdGenerator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::form::{ApplicantForm, FormField};

/// Top-level tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    NewQuote,
    FindQuote,
}

/// What the user is currently looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    NewQuoteForm,
    QuoteResult,
    LookupForm,
    LookupResult,
}

/// New-quote branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewQuoteState {
    pub form: ApplicantForm,
    /// Why the last submit was rejected
    pub form_error: Option<FormError>,
    pub quote: Option<Quote>,
}

/// Find-quote branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupState {
    /// Shaped input: uppercase, at most 7 characters
    pub quote_id: String,
    pub error: Option<LookupError>,
    pub found: Option<Quote>,
}

impl LookupState {
    /// The find button is only enabled for a full-length id
    pub fn can_submit(&self) -> bool {
        self.quote_id.chars().count() == QUOTE_ID_LEN
    }
}

/// Whole-app state; each branch keeps its contents while its tab is hidden
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub active_tab: Tab,
    pub new_quote: NewQuoteState,
    pub lookup: LookupState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        match self.active_tab {
            Tab::NewQuote if self.new_quote.quote.is_some() => Screen::QuoteResult,
            Tab::NewQuote => Screen::NewQuoteForm,
            Tab::FindQuote if self.lookup.found.is_some() => Screen::LookupResult,
            Tab::FindQuote => Screen::LookupForm,
        }
    }
}

/// User actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SelectTab(Tab),
    EditField(FormField, String),
    SubmitQuote,
    /// "Get New Quote": clear the form and the shown quote
    NewQuote,
    /// Raw keystroke input for the quote-id box
    EditLookupId(String),
    SubmitLookup,
    /// "Find Another Quote": clear the lookup branch
    FindAnother,
}

impl Action {
    /// Tab this action belongs to; `None` for tab switches
    fn tab(&self) -> Option<Tab> {
        match self {
            Action::SelectTab(_) => None,
            Action::EditField(..) | Action::SubmitQuote | Action::NewQuote => Some(Tab::NewQuote),
            Action::EditLookupId(_) | Action::SubmitLookup | Action::FindAnother => {
                Some(Tab::FindQuote)
            }
        }
    }
}

/// Read-only collaborators of the reducer
#[derive(Clone, Copy)]
pub struct QuoteEnv<'a> {
    pub directory: &'a QuoteDirectory,
    pub ids: &'a dyn QuoteIdGenerator,
}

impl<'a> QuoteEnv<'a> {
    pub fn new(directory: &'a QuoteDirectory, ids: &'a dyn QuoteIdGenerator) -> Self {
        Self { directory, ids }
    }
}

/// Apply one action
///
/// Actions aimed at the hidden tab are ignored, as are edits and submits
/// on the new-quote form while its result is showing.
pub fn reduce(mut state: AppState, action: Action, env: &QuoteEnv<'_>) -> AppState {
    if let Some(tab) = action.tab() {
        if tab != state.active_tab {
            debug!(?action, "Ignoring action for hidden tab");
            return state;
        }
    }

    match action {
        Action::SelectTab(tab) => {
            state.active_tab = tab;
        }
        Action::EditField(field, value) => {
            if state.new_quote.quote.is_none() {
                state.new_quote.form.set(field, value);
                state.new_quote.form_error = None;
            }
        }
        Action::SubmitQuote => {
            if state.new_quote.quote.is_none() {
                match state.new_quote.form.validate() {
                    Ok(applicant) => {
                        let quote = quote_applicant(&applicant, env.ids);
                        debug!(quote_id = %quote.id, amount = quote.amount, "Quote issued");
                        state.new_quote.quote = Some(quote);
                        state.new_quote.form_error = None;
                    }
                    Err(e) => {
                        debug!(error = %e, "Quote form rejected");
                        state.new_quote.form_error = Some(e);
                    }
                }
            }
        }
        Action::NewQuote => {
            state.new_quote = NewQuoteState::default();
        }
        Action::EditLookupId(raw) => {
            state.lookup.quote_id = normalize_quote_id_input(&raw);
            state.lookup.error = None;
            state.lookup.found = None;
        }
        Action::SubmitLookup => match find_quote(env.directory, &state.lookup.quote_id) {
            Ok(quote) => {
                state.lookup.found = Some(quote);
                state.lookup.error = None;
            }
            Err(e) => {
                state.lookup.found = None;
                state.lookup.error = Some(e);
            }
        },
        Action::FindAnother => {
            state.lookup = LookupState::default();
        }
    }

    state
}
