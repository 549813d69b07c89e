//! CLI interface for the box office.
//!
//! One invocation replays one command file: arguments in, transcript file out.
//! Diagnostics go to stderr through `tracing`; the transcript never carries them.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::interpreter::{self, Outcome};
use crate::office::BoxOffice;
use crate::storage;
use crate::transcript::Transcript;

/// Box office: replay ticketing commands and write the transcript.
#[derive(Debug, Parser)]
#[command(name = "box-office", version, after_long_help = GRAMMAR_HELP)]
pub struct Cli {
    /// Command file, one tab-separated command per line.
    pub input: PathBuf,

    /// Where the transcript is written. Replaced if it exists.
    pub output: PathBuf,

    /// Config file (defaults to `~/.box-office/config.toml` when present).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

const GRAMMAR_HELP: &str = "Commands (fields separated by tabs):
  INIT_VOYAGE    <Standard|Premium|Minibus> <id> <from> <to> <rows> <fee> [<refund cut>] [<premium fee>]
  SELL_TICKET    <id> <seat>[_<seat>...]
  REFUND_TICKET  <id> <seat>[_<seat>...]
  CANCEL_VOYAGE  <id>
  PRINT_VOYAGE   <id>
  Z_REPORT";

/// Run the CLI, returning an error message on failure.
pub fn run(cli: &Cli, config: &Config) -> Result<Outcome, String> {
    let lines = storage::read_lines(&cli.input)
        .map_err(|e| format!("failed to read {}: {e}", cli.input.display()))?;
    tracing::info!(input = %cli.input.display(), commands = lines.len(), "replaying commands");

    let mut office = BoxOffice::new(&config.currency);
    let mut transcript = Transcript::new();
    let outcome = interpreter::run(&mut office, &lines, &mut transcript);

    storage::write_transcript(&cli.output, &transcript)
        .map_err(|e| format!("failed to write {}: {e}", cli.output.display()))?;
    tracing::info!(
        output = %cli.output.display(),
        voyages = office.voyages().len(),
        ?outcome,
        "transcript written"
    );

    Ok(outcome)
}
