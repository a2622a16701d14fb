//! Text rendering of the current screen

use autoquote_common::Quote;
use autoquote_directory::QuoteDirectory;

use crate::form::FormField;
use crate::state::{AppState, Screen, Tab};

const TITLE: &str = "Insurance Quote Calculator";
const TAGLINE: &str = "Get your personalized insurance quote in seconds!";

/// Render the header, tab bar, and active screen
pub fn render(state: &AppState) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        TAGLINE.to_string(),
        String::new(),
        tab_bar(state.active_tab),
        String::new(),
    ];

    match state.screen() {
        Screen::NewQuoteForm => {
            for field in FormField::ALL {
                lines.push(format!(
                    "{}: {}",
                    field.label(),
                    state.new_quote.form.get(field)
                ));
            }
            if let Some(err) = &state.new_quote.form_error {
                lines.push(format!("Error: {}", err));
            }
            lines.push("[Get Quote]".to_string());
        }
        Screen::QuoteResult => {
            if let Some(quote) = &state.new_quote.quote {
                lines.push("Your Insurance Quote".to_string());
                lines.extend(summary_lines(quote));
            }
            lines.push("[Get New Quote]".to_string());
        }
        Screen::LookupForm => {
            let lookup = &state.lookup;
            lines.push("Find Existing Quote".to_string());
            lines.push(
                "Enter your 7-character Quote ID to retrieve your existing quote.".to_string(),
            );
            lines.push(format!("Quote ID: {}", lookup.quote_id));
            lines.push(
                "Quote ID must be exactly 7 characters (letters and numbers only)".to_string(),
            );
            if let Some(err) = &lookup.error {
                lines.push(format!("Error: {}", err));
            }
            lines.push(if lookup.can_submit() {
                "[Find Quote]".to_string()
            } else {
                "[Find Quote] (disabled)".to_string()
            });
            lines.push(String::new());
            lines.push("Try these sample Quote IDs:".to_string());
            for hint in QuoteDirectory::SAMPLE_HINTS {
                lines.push(format!("  - {}", hint));
            }
        }
        Screen::LookupResult => {
            if let Some(quote) = &state.lookup.found {
                lines.push("Found Quote".to_string());
                lines.push(render_quote(quote));
            }
            lines.push("[Find Another Quote]".to_string());
        }
    }

    lines.join("\n")
}

/// Full quote detail, as shown for a found quote
pub fn render_quote(quote: &Quote) -> String {
    let mut lines = summary_lines(quote);
    lines.push(format!("Vehicle Type: {}", quote.vehicle_type));
    lines.push(format!("Coverage Type: {}", quote.coverage));
    lines.push(format!("Email: {}", quote.email));
    lines.join("\n")
}

fn summary_lines(quote: &Quote) -> Vec<String> {
    vec![
        format!("Customer: {}", quote.customer_name),
        format!("Quote Number: {}", quote.id),
        format!("Annual Premium: ${}", quote.amount),
    ]
}

fn tab_bar(active: Tab) -> String {
    let mark = |tab: Tab, label: &str| {
        if tab == active {
            format!("[{}]", label)
        } else {
            label.to_string()
        }
    };
    format!(
        "{} | {}",
        mark(Tab::NewQuote, "Get New Quote"),
        mark(Tab::FindQuote, "Find Existing Quote")
    )
}
