//! The command interpreter: replays command lines against the box office.
//!
//! One pass, one line at a time. Every line is echoed, parsed, and handed to
//! the box office; a rejected command is reported and the run moves on.
//! The only state carried between lines is the box office itself.

mod command;

pub use command::{Command, Verb};

use crate::ledger::Segment;
use crate::office::{BookingError, BoxOffice};
use crate::transcript::Transcript;

/// Why a command line was not carried out.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("There is no command namely {0}!")]
    UnknownCommand(String),

    #[error("Erroneous usage of \"{0}\" command!")]
    Malformed(Verb),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every line was replayed and the closing report written.
    Completed,

    /// There were no commands; only the empty report was written.
    EmptyInput,
}

/// Replays `lines` in order, then closes the transcript with a Z report
/// unless the last line already was one.
pub fn run<S: AsRef<str>>(office: &mut BoxOffice, lines: &[S], out: &mut Transcript) -> Outcome {
    let Some(last) = lines.last() else {
        tracing::warn!("no commands to replay");
        office.z_report(out, Segment::Final);
        return Outcome::EmptyInput;
    };

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let segment = if index + 1 == lines.len() {
            Segment::Final
        } else {
            Segment::Middle
        };

        out.line(format!("COMMAND: {line}"));
        if let Err(err) = execute(office, line, segment, out) {
            tracing::debug!(line, %err, "command rejected");
            out.error(&err);
        }
    }

    office.sort_voyages();
    if last.as_ref() != Verb::ZReport.keyword() {
        office.z_report(out, Segment::Final);
    }
    Outcome::Completed
}

/// Parses and carries out a single command line.
///
/// `segment` tells a Z report whether it is the last thing written.
pub fn execute(
    office: &mut BoxOffice,
    line: &str,
    segment: Segment,
    out: &mut Transcript,
) -> Result<(), CommandError> {
    match Command::parse(line)? {
        Command::InitVoyage(request) => office.init_voyage(request, out)?,
        Command::ZReport => office.z_report(out, segment),
        Command::SellTicket { id, seats } => office.sell_ticket(id, &seats, out)?,
        Command::RefundTicket { id, seats } => office.refund_ticket(id, &seats, out)?,
        Command::CancelVoyage { id } => office.cancel_voyage(id, out)?,
        Command::PrintVoyage { id } => office.print_voyage(id, out)?,
    }
    Ok(())
}
