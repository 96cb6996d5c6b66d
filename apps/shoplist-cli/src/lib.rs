//! # Shoplist CLI Library
//!
//! Terminal front end for the shopping list. This is where startup happens
//! and where the read–dispatch–render loop lives.
//!
//! ## Module Organization
//! ```text
//! shoplist_cli/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── ListStore + delete confirmation
//! │   └── config.rs   ◄─── Configuration loading
//! ├── commands/
//! │   ├── mod.rs      ◄─── Parsing & dispatch
//! │   ├── list.rs     ◄─── List commands
//! │   └── link.rs     ◄─── External links
//! ├── render.rs       ◄─── Text / JSON output
//! └── error.rs        ◄─── App error type
//! ```
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   render list ──► prompt ──► read line ──┐                             │
//! │        ▲                                  │                             │
//! │        │                    confirming? ──┼── yes ──► answer_delete     │
//! │        │                                  │                             │
//! │        │                                  └── no ───► parse + execute   │
//! │        │                                                   │            │
//! │        └───────────────────────────────────────────────────┘            │
//! │                                                                         │
//! │   One line at a time, fully applied before the next is read.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use shoplist_core::IdStrategy;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use commands::link::{Browser, SystemBrowser};
use commands::list::{self as list_commands, ListResponse};
use commands::{Command, Reply};
use error::AppError;
use render::View;
use state::{AppConfig, OutputFormat, Session};

/// Command line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// `--config <path>` (or `SHOPLIST_CONFIG`)
    pub config_path: Option<PathBuf>,
    /// `--json`
    pub json: bool,
    /// `--sequential-ids`
    pub sequential_ids: bool,
    /// `--help`
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::usage("--config needs a path"))?;
                    parsed.config_path = Some(PathBuf::from(path));
                }
                "--json" => parsed.json = true,
                "--sequential-ids" => parsed.sequential_ids = true,
                "--help" | "-h" => parsed.help = true,
                other => {
                    return Err(AppError::usage(format!("unknown argument '{}'", other)));
                }
            }
        }

        Ok(parsed)
    }

    /// Applies flag overrides on top of the loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if self.json {
            config.ui.output = OutputFormat::Json;
        }
        if self.sequential_ids {
            config.store.id_strategy = IdStrategy::Sequential;
        }
    }
}

const USAGE: &str = "\
Usage: shoplist [OPTIONS]

Options:
  -c, --config <PATH>    Config file (default: platform config dir, or SHOPLIST_CONFIG)
      --json             Print one JSON document per reply
      --sequential-ids   Use 1, 2, 3, ... as item ids instead of UUIDs
  -h, --help             Show this help message";

/// Runs the application.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr)
/// 2. Parse arguments
/// 3. Load configuration (file → env → flags)
/// 4. Create an empty session
/// 5. Run the session loop on stdin/stdout
pub fn run() -> ExitCode {
    init_tracing();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n\n{}", e.message, USAGE);
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Startup failed: {}", e);
            eprintln!("error: {}", e.message);
            return ExitCode::FAILURE;
        }
    };

    info!(
        id_strategy = %config.store.id_strategy,
        output = %config.ui.output,
        "Starting shopping list session"
    );

    let mut session = Session::new(config.store.id_strategy);
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_session(
        &mut session,
        &config,
        &SystemBrowser,
        stdin.lock(),
        &mut stdout.lock(),
    ) {
        Ok(()) => {
            info!(items = session.store().len(), "Session ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Session aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads the config, honoring `--config` and `SHOPLIST_CONFIG`.
///
/// An explicitly named file must load; the default location falls back to
/// defaults on any problem.
fn load_config(args: &CliArgs) -> Result<AppConfig, AppError> {
    let explicit = args
        .config_path
        .clone()
        .or_else(|| std::env::var_os("SHOPLIST_CONFIG").map(PathBuf::from));

    let mut config = match explicit {
        Some(path) => AppConfig::load(Some(&path))?,
        None => AppConfig::load_or_default(None),
    };

    args.apply(&mut config);
    Ok(config)
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never interleave with the list on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every dispatched intent
/// - Default: warnings, plus info for shoplist crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shoplist=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads lines from `input` until EOF or `quit`, applying each one.
///
/// Command errors are rendered and the loop continues; only I/O failures
/// end it early.
pub fn run_session<R, W>(
    session: &mut Session,
    config: &AppConfig,
    browser: &dyn Browser,
    input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let view = View::new(&config.ui);

    view.list(out, &ListResponse::from(session.store()))?;
    view.prompt(out)?;

    for line in input.lines() {
        let line = line?;

        if session.is_confirming() {
            let response = list_commands::answer_delete(session, &line);
            view.list(out, &response)?;
        } else {
            match Command::parse(&line).and_then(|cmd| commands::execute(cmd, session, browser)) {
                Ok(Reply::Quit) => break,
                Ok(reply) => view.reply(out, &reply)?,
                Err(e) => view.error(out, &e)?,
            }
        }

        // The confirmation question doubles as the prompt.
        if session.is_confirming() {
            out.flush()?;
        } else {
            view.prompt(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::link::tests::RecordingBrowser;
    use shoplist_core::ListSummary;
    use std::io::Cursor;

    fn sequential_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.store.id_strategy = IdStrategy::Sequential;
        config
    }

    fn drive(config: &AppConfig, script: &str) -> (Session, String) {
        let mut session = Session::new(config.store.id_strategy);
        let browser = RecordingBrowser::default();
        let mut out = Vec::new();

        run_session(
            &mut session,
            config,
            &browser,
            Cursor::new(script.to_string()),
            &mut out,
        )
        .unwrap();

        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_milk_eggs_session() {
        let (session, _) = drive(
            &sequential_config(),
            "add Milk\nadd Eggs\ntoggle 2\ndelete 1\ny\n",
        );

        let items = session.store().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Eggs");
        assert!(items[0].completed);
        assert_eq!(
            session.store().summary(),
            ListSummary {
                remaining: 0,
                total: 1
            }
        );
    }

    #[test]
    fn test_declined_delete_keeps_item() {
        let (session, output) = drive(&sequential_config(), "add Milk\nrm 1\nno\n");

        assert_eq!(session.store().len(), 1);
        assert!(output.contains("Delete this item? \"Milk\" [y/N] "));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (session, output) = drive(&sequential_config(), "frobnicate\ntoggle\nadd Milk\n");

        assert!(output.contains("error: unknown command 'frobnicate' (type 'help')"));
        assert!(output.contains("error: usage: toggle <position|id>"));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_blank_and_stale_input_are_noops() {
        let (session, _) = drive(
            &sequential_config(),
            "add Milk\nadd    \n\ntoggle 99\ndelete ghost\n",
        );

        assert_eq!(session.store().len(), 1);
        assert!(!session.store().items()[0].completed);
        assert!(!session.is_confirming());
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = drive(&sequential_config(), "add Milk\nquit\nadd Eggs\n");
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_json_session_output() {
        let mut config = sequential_config();
        config.ui.output = OutputFormat::Json;

        let (_, output) = drive(&config, "add Milk\n");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["items"][0]["id"], "1");
        assert_eq!(last["summary"]["total"], 1);
    }

    #[test]
    fn test_cli_args() {
        let args = CliArgs::parse(
            ["--json", "-c", "/tmp/x.toml", "--sequential-ids"]
                .iter()
                .map(|s| s.to_string()),
        )
        .unwrap();

        assert!(args.json);
        assert!(args.sequential_ids);
        assert_eq!(args.config_path, Some(PathBuf::from("/tmp/x.toml")));

        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.ui.output, OutputFormat::Json);
        assert_eq!(config.store.id_strategy, IdStrategy::Sequential);

        assert!(CliArgs::parse(vec!["--config".to_string()]).is_err());
        assert!(CliArgs::parse(vec!["--verbose".to_string()]).is_err());
    }
}
