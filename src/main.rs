//! scheme-picker CLI
//!
//! Interactive segmented picker plus a few one-shot commands that expose
//! the same store without a terminal UI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use scheme_picker::logging;
use scheme_picker::report::{format_options, format_state};
use scheme_picker::store::{ApplicationState, Event, Store};
use scheme_picker::tui::run::run;
use scheme_picker::types::{LogSink, OutputFormat, Selection, SessionConfig};

#[derive(Parser)]
#[command(name = "scheme-picker")]
#[command(about = "Pick a value, switch the color scheme")]
#[command(version)]
struct Cli {
    /// Append logs to this file (default: stderr for one-shot commands, off for the TUI)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive picker (default)
    Run {
        /// Starting selection, by label or id
        #[arg(long, default_value = "Foo")]
        initial: Selection,
    },

    /// List every option with the color scheme it implies
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Show the state and color scheme for an option id
    Show {
        /// Option id (0, 1 or 2)
        #[arg(allow_hyphen_values = true)]
        id: i64,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Apply selections in order from the initial state and print the result
    Replay {
        /// Selections, by label or id
        #[arg(required = true)]
        selections: Vec<Selection>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_failure_status(&e));
        }
    };
    let command = cli.command.unwrap_or(Commands::Run {
        initial: Selection::default(),
    });

    let log = match (cli.log_file, &command) {
        (Some(path), _) => LogSink::File(path),
        (None, Commands::Run { .. }) => LogSink::Disabled,
        (None, _) => LogSink::Stderr,
    };

    // The TUI installs logging itself from its SessionConfig.
    if !matches!(command, Commands::Run { .. }) {
        if let Err(e) = logging::init(&log) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let result = match command {
        Commands::Run { initial } => cmd_run(SessionConfig { initial, log }),
        Commands::List { format } => cmd_list(format.into()),
        Commands::Show { id, format } => cmd_show(id, format.into()),
        Commands::Replay { selections, format } => cmd_replay(&selections, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Exit status for a rejected command line: 0 for `--help`/`--version`,
/// 1 for every real argument error.
fn parse_failure_status(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(config: SessionConfig) -> Result<(), String> {
    run(config).map_err(|e| format!("terminal error: {}", e))
}

fn cmd_list(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_options(format));
    Ok(())
}

fn cmd_show(id: i64, format: OutputFormat) -> Result<(), String> {
    let selection = Selection::from_id(id).map_err(|e| e.to_string())?;
    print!("{}", format_state(&ApplicationState::new(selection), format));
    Ok(())
}

fn cmd_replay(selections: &[Selection], format: OutputFormat) -> Result<(), String> {
    let mut store = Store::default();
    for &selection in selections {
        store.dispatch(Event::SelectionChanged(selection));
    }
    print!("{}", format_state(store.state(), format));
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
