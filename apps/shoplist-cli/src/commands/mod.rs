//! # Commands Module
//!
//! Everything the user can type at the prompt.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing + dispatch)
//! ├── list.rs     ◄─── add, toggle, delete + confirm, list
//! └── link.rs     ◄─── open external links
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "rm 2" ──► Command::parse ──► Command::Delete("2")                     │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                        execute(cmd, session, browser)                   │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                        Reply::ConfirmDelete(item) ──► renderer          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Syntax
//! | Input                      | Effect                         |
//! |----------------------------|--------------------------------|
//! | `add <name>`, `+ <name>`   | add an item                    |
//! | `toggle <ref>`, `t <ref>`  | flip completed                 |
//! | `delete <ref>`, `rm <ref>` | delete after confirmation      |
//! | `list`, `ls`               | show the list                  |
//! | `open <url>`               | open an external link          |
//! | `help`, `?`                | show help                      |
//! | `quit`, `exit`, `q`        | leave                          |
//!
//! `<ref>` is a position in the list (1, 2, ...) or an item id.

pub mod link;
pub mod list;

use shoplist_core::links::Platform;
use shoplist_core::ShoppingItem;

use crate::error::AppError;
use crate::state::Session;
use link::Browser;
use list::ListResponse;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(String),
    Delete(String),
    List,
    Open(String),
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl Command {
    /// Parses one input line.
    ///
    /// `add` without a name parses fine (the store ignores the blank name);
    /// `toggle`, `delete` and `open` need an argument.
    pub fn parse(line: &str) -> Result<Command, AppError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "" => Command::Nothing,
            "add" | "+" => Command::Add(rest.to_string()),
            "toggle" | "t" => Command::Toggle(required(rest, "toggle <position|id>")?),
            "delete" | "rm" => Command::Delete(required(rest, "delete <position|id>")?),
            "list" | "ls" => Command::List,
            "open" => Command::Open(required(rest, "open <url>")?),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(AppError::usage(format!(
                    "unknown command '{}' (type 'help')",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn required(arg: &str, usage: &str) -> Result<String, AppError> {
    if arg.is_empty() {
        return Err(AppError::usage(format!("usage: {}", usage)));
    }
    Ok(arg.to_string())
}

/// What to show after a command ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Re-render the list.
    List(ListResponse),
    /// Ask the user to confirm deleting this item.
    ConfirmDelete(ShoppingItem),
    /// A link was opened.
    Opened(String),
    Help,
    Quit,
    Nothing,
}

/// Runs a parsed command against the session.
pub fn execute(
    command: Command,
    session: &mut Session,
    browser: &dyn Browser,
) -> Result<Reply, AppError> {
    let reply = match command {
        Command::Add(name) => Reply::List(list::add_item(session, &name)),
        Command::Toggle(reference) => Reply::List(list::toggle_item(session, &reference)?),
        Command::Delete(reference) => match list::request_delete(session, &reference)? {
            Some(item) => Reply::ConfirmDelete(item),
            // Stale reference: nothing to confirm, just show the list again.
            None => Reply::List(list::get_list(session)),
        },
        Command::List => Reply::List(list::get_list(session)),
        Command::Open(raw) => {
            let link = link::open_link(browser, &raw, Platform::current())?;
            Reply::Opened(link.url.to_string())
        }
        Command::Help => Reply::Help,
        Command::Quit => Reply::Quit,
        Command::Nothing => Reply::Nothing,
    };

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use super::link::tests::RecordingBrowser;
    use shoplist_core::IdStrategy;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("add  Whole milk ").unwrap(),
            Command::Add("Whole milk".to_string())
        );
        assert_eq!(
            Command::parse("+ Eggs").unwrap(),
            Command::Add("Eggs".to_string())
        );
        assert_eq!(Command::parse("add").unwrap(), Command::Add(String::new()));
        assert_eq!(
            Command::parse("T 2").unwrap(),
            Command::Toggle("2".to_string())
        );
        assert_eq!(
            Command::parse("rm abc").unwrap(),
            Command::Delete("abc".to_string())
        );
        assert_eq!(Command::parse("ls").unwrap(), Command::List);
        assert_eq!(Command::parse("?").unwrap(), Command::Help);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("   ").unwrap(), Command::Nothing);
    }

    #[test]
    fn test_parse_errors() {
        let err = Command::parse("toggle").unwrap_err();
        assert_eq!(err.code, ErrorCode::Usage);
        assert_eq!(err.message, "usage: toggle <position|id>");

        let err = Command::parse("buy milk").unwrap_err();
        assert_eq!(err.message, "unknown command 'buy' (type 'help')");
    }

    #[test]
    fn test_execute_flow() {
        let mut session = Session::new(IdStrategy::Sequential);
        let browser = RecordingBrowser::default();

        let reply = execute(Command::Add("Milk".into()), &mut session, &browser).unwrap();
        assert!(matches!(reply, Reply::List(ref r) if r.items.len() == 1));

        let reply = execute(Command::Delete("1".into()), &mut session, &browser).unwrap();
        assert!(matches!(reply, Reply::ConfirmDelete(ref item) if item.name == "Milk"));

        let reply = execute(Command::Delete("7".into()), &mut session, &browser).unwrap();
        assert!(matches!(reply, Reply::List(_)));
    }

    #[test]
    fn test_execute_open() {
        let mut session = Session::default();
        let browser = RecordingBrowser::default();

        let reply = execute(
            Command::Open("https://example.com".into()),
            &mut session,
            &browser,
        )
        .unwrap();
        assert_eq!(reply, Reply::Opened("https://example.com/".to_string()));
    }
}
