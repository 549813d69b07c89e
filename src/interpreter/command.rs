//! Command grammar: one tab-separated line in, one typed command out.

use std::fmt;

use crate::office::VoyageRequest;

use super::CommandError;

/// The verbs the box office understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    InitVoyage,
    ZReport,
    SellTicket,
    RefundTicket,
    CancelVoyage,
    PrintVoyage,
}

impl Verb {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::InitVoyage => "INIT_VOYAGE",
            Self::ZReport => "Z_REPORT",
            Self::SellTicket => "SELL_TICKET",
            Self::RefundTicket => "REFUND_TICKET",
            Self::CancelVoyage => "CANCEL_VOYAGE",
            Self::PrintVoyage => "PRINT_VOYAGE",
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        [
            Self::InitVoyage,
            Self::ZReport,
            Self::SellTicket,
            Self::RefundTicket,
            Self::CancelVoyage,
            Self::PrintVoyage,
        ]
        .into_iter()
        .find(|verb| verb.keyword() == keyword)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed command line.
///
/// Numbers are checked for shape only; whether they are in range is the
/// box office's call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    InitVoyage(VoyageRequest),
    ZReport,
    SellTicket { id: i64, seats: Vec<i64> },
    RefundTicket { id: i64, seats: Vec<i64> },
    CancelVoyage { id: i64 },
    PrintVoyage { id: i64 },
}

impl Command {
    /// Parses one input line.
    ///
    /// Fails with [`CommandError::UnknownCommand`] for an unrecognized verb and
    /// [`CommandError::Malformed`] for a wrong field count or a field that is
    /// not a number where one is required.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let fields: Vec<&str> = line.split('\t').collect();
        let keyword = fields[0];
        let verb = Verb::from_keyword(keyword)
            .ok_or_else(|| CommandError::UnknownCommand(keyword.to_string()))?;

        parse_fields(verb, &fields[1..]).ok_or(CommandError::Malformed(verb))
    }
}

fn parse_fields(verb: Verb, args: &[&str]) -> Option<Command> {
    let command = match (verb, args) {
        (Verb::InitVoyage, [kind, id, origin, destination, rows, fee, optional @ ..])
            if optional.len() <= 2 =>
        {
            // Refund cut, then premium fee.
            let optional = optional
                .iter()
                .map(|field| decimal(field))
                .collect::<Option<Vec<_>>>()?;
            Command::InitVoyage(VoyageRequest {
                kind: (*kind).to_string(),
                id: integer(id)?,
                origin: (*origin).to_string(),
                destination: (*destination).to_string(),
                rows: integer(rows)?,
                fee: decimal(fee)?,
                refund_cut: optional.first().copied(),
                premium_fee: optional.get(1).copied(),
            })
        }
        (Verb::ZReport, []) => Command::ZReport,
        (Verb::SellTicket, [id, seats]) => Command::SellTicket {
            id: integer(id)?,
            seats: seat_list(seats)?,
        },
        (Verb::RefundTicket, [id, seats]) => Command::RefundTicket {
            id: integer(id)?,
            seats: seat_list(seats)?,
        },
        (Verb::CancelVoyage, [id]) => Command::CancelVoyage { id: integer(id)? },
        (Verb::PrintVoyage, [id]) => Command::PrintVoyage { id: integer(id)? },
        _ => return None,
    };
    Some(command)
}

fn integer(field: &str) -> Option<i64> {
    field.parse().ok()
}

fn decimal(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Seat numbers separated by `_`, e.g. `3_4_10`.
fn seat_list(field: &str) -> Option<Vec<i64>> {
    field.split('_').map(integer).collect()
}
