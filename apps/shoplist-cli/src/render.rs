//! # Rendering
//!
//! Writes replies to the terminal as text or JSON.
//!
//! ## Text Layout
//! ```text
//! == Shopping List ==
//!   1. [ ] Milk
//!   2. [x] Eggs
//! 1/2 remaining
//! >
//! ```
//!
//! In JSON mode every reply is one line of JSON and no prompt is printed, so
//! the output can be piped into other tools.

use std::io::{self, Write};

use serde_json::json;
use shoplist_core::ShoppingItem;

use crate::commands::list::ListResponse;
use crate::commands::Reply;
use crate::error::AppError;
use crate::state::{OutputFormat, UiConfig};

const HELP: &[(&str, &str)] = &[
    ("add <name>", "add an item (alias: +)"),
    ("toggle <ref>", "mark an item done / not done (alias: t)"),
    ("delete <ref>", "delete an item after confirming (alias: rm)"),
    ("list", "show the list (alias: ls)"),
    ("open <url>", "open a link in the browser"),
    ("help", "show this help (alias: ?)"),
    ("quit", "leave (aliases: exit, q)"),
];

/// Renders replies according to the UI config.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    ui: &'a UiConfig,
}

impl<'a> View<'a> {
    pub fn new(ui: &'a UiConfig) -> Self {
        View { ui }
    }

    /// Writes a command reply.
    pub fn reply<W: Write>(&self, out: &mut W, reply: &Reply) -> io::Result<()> {
        match reply {
            Reply::List(response) => self.list(out, response),
            Reply::ConfirmDelete(item) => self.confirm_delete(out, item),
            Reply::Opened(url) => match self.ui.output {
                OutputFormat::Text => writeln!(out, "Opened {}", url),
                OutputFormat::Json => writeln!(out, "{}", json!({ "opened": url })),
            },
            Reply::Help => self.help(out),
            Reply::Quit | Reply::Nothing => Ok(()),
        }
    }

    /// Writes the list with its summary, or the empty-state message.
    pub fn list<W: Write>(&self, out: &mut W, response: &ListResponse) -> io::Result<()> {
        if self.ui.output == OutputFormat::Json {
            return writeln!(out, "{}", to_json(response)?);
        }

        writeln!(out, "== {} ==", self.ui.title)?;

        if response.items.is_empty() {
            return writeln!(out, "{}", self.ui.empty_message);
        }

        for (index, item) in response.items.iter().enumerate() {
            let check = if item.completed { "x" } else { " " };
            writeln!(out, "{:>3}. [{}] {}", index + 1, check, item.name)?;
        }
        writeln!(out, "{}", response.summary)
    }

    /// Asks whether `item` should really be deleted.
    pub fn confirm_delete<W: Write>(&self, out: &mut W, item: &ShoppingItem) -> io::Result<()> {
        match self.ui.output {
            OutputFormat::Text => {
                write!(out, "{} \"{}\" [y/N] ", self.ui.confirm_prompt, item.name)
            }
            OutputFormat::Json => writeln!(
                out,
                "{}",
                json!({ "confirmDelete": item, "prompt": self.ui.confirm_prompt })
            ),
        }
    }

    /// Writes a command error. The session continues afterwards.
    pub fn error<W: Write>(&self, out: &mut W, err: &AppError) -> io::Result<()> {
        match self.ui.output {
            OutputFormat::Text => writeln!(out, "error: {}", err.message),
            OutputFormat::Json => writeln!(out, "{}", to_json(err)?),
        }
    }

    /// Writes the input prompt (text mode only).
    pub fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.ui.output == OutputFormat::Text {
            write!(out, "> ")?;
        }
        out.flush()
    }

    fn help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.ui.output {
            OutputFormat::Text => {
                for (usage, what) in HELP {
                    writeln!(out, "  {:<14} {}", usage, what)?;
                }
                writeln!(out, "  <ref> is a position (1, 2, ...) or an item id")
            }
            OutputFormat::Json => {
                let commands: Vec<_> = HELP
                    .iter()
                    .map(|(usage, what)| json!({ "usage": usage, "description": what }))
                    .collect();
                writeln!(out, "{}", json!({ "commands": commands }))
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string(value).map_err(io::Error::from)
}
