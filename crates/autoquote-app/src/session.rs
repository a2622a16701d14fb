//! Line-oriented interactive session
//!
//! Each input line is one command; commands map onto reducer actions.
//! After every action the active screen is written out again.

use std::io::{BufRead, Write};

use autoquote_common::Result;
use thiserror::Error;
use tracing::{debug, info};

use crate::form::FormField;
use crate::state::{reduce, Action, AppState, QuoteEnv, Tab};
use crate::view::render;

pub const HELP: &str = "\
Commands:
  tab new|find          switch tab
  set <field> <value>   edit a form field (first_name, last_name, age,
                        vehicle_type, coverage, email)
  submit                get a quote for the form
  new                   clear the form and start over
  id <value>            type into the quote-id box
  find                  look up the typed quote id
  another               clear the lookup and search again
  show                  print the current screen
  help                  print this help
  quit                  leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Show,
    Help,
    Quit,
}

/// Unparseable input lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown tab: {0} (expected `new` or `find`)")]
    UnknownTab(String),
}

/// Parse one line; the rest of the line after the keyword is the argument
pub fn parse_command(line: &str) -> std::result::Result<Command, CommandError> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "" => return Err(CommandError::Empty),
        "tab" => Command::Act(Action::SelectTab(parse_tab(rest)?)),
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((f, v)) => (f, v.trim()),
                None if rest.is_empty() => return Err(CommandError::MissingArgument("field")),
                None => (rest, ""),
            };
            Command::Act(Action::EditField(field.parse::<FormField>()?, value.to_string()))
        }
        "submit" => Command::Act(Action::SubmitQuote),
        "new" => Command::Act(Action::NewQuote),
        "id" => Command::Act(Action::EditLookupId(rest.to_string())),
        "find" => Command::Act(Action::SubmitLookup),
        "another" => Command::Act(Action::FindAnother),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn parse_tab(raw: &str) -> std::result::Result<Tab, CommandError> {
    match raw.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::MissingArgument("tab")),
        "new" | "new_quote" => Ok(Tab::NewQuote),
        "find" | "find_quote" | "lookup" => Ok(Tab::FindQuote),
        _ => Err(CommandError::UnknownTab(raw.to_string())),
    }
}

/// Drive the reducer from `input` until EOF or `quit`
///
/// Returns the final state.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    env: &QuoteEnv<'_>,
    json: bool,
) -> Result<AppState> {
    info!("Interactive session started");
    let mut state = AppState::new();
    write_screen(&mut output, &state, json)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Act(action)) => {
                debug!(?action, "Applying action");
                state = reduce(state, action, env);
                write_screen(&mut output, &state, json)?;
            }
            Ok(Command::Show) => write_screen(&mut output, &state, json)?,
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(Command::Quit) => break,
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }

    info!("Interactive session ended");
    Ok(state)
}

fn write_screen<W: Write>(output: &mut W, state: &AppState, json: bool) -> Result<()> {
    if json {
        writeln!(output, "{}", serde_json::to_string(state)?)?;
    } else {
        writeln!(output, "{}\n", render(state))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            parse_command("tab find").unwrap(),
            Command::Act(Action::SelectTab(Tab::FindQuote))
        );
        assert_eq!(
            parse_command("set first_name Mary Ann").unwrap(),
            Command::Act(Action::EditField(FormField::FirstName, "Mary Ann".to_string()))
        );
        assert_eq!(
            parse_command("  id q123456  ").unwrap(),
            Command::Act(Action::EditLookupId("q123456".to_string()))
        );
        assert_eq!(parse_command("SUBMIT").unwrap(), Command::Act(Action::SubmitQuote));
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_set_without_value_clears_field() {
        assert_eq!(
            parse_command("set email").unwrap(),
            Command::Act(Action::EditField(FormField::Email, String::new()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("fly away"),
            Err(CommandError::Unknown("fly".to_string()))
        );
        assert_eq!(parse_command("set"), Err(CommandError::MissingArgument("field")));
        assert_eq!(
            parse_command("set zip 90210"),
            Err(CommandError::UnknownField("zip".to_string()))
        );
        assert_eq!(
            parse_command("tab settings"),
            Err(CommandError::UnknownTab("settings".to_string()))
        );
    }
}
