//! The box office: the only writer of voyage state.
//!
//! Every operation validates its whole request before touching anything,
//! so a rejected command leaves seats and revenue exactly as they were.
//! Confirmations and renders go to the transcript; failures come back as
//! [`BookingError`] for the caller to report.

use crate::ledger::{self, Segment, format_money};
use crate::model::{MAX_ROWS, SeatNumber, SeatState, Voyage, VoyageId, VoyageKind};
use crate::transcript::Transcript;

/// Errors a booking operation can reject a request with.
///
/// The message of each variant is the text reported in the transcript.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("There is already a voyage with ID of {0}!")]
    DuplicateVoyage(VoyageId),

    #[error("There is no voyage with ID of {0}!")]
    VoyageNotFound(VoyageId),

    #[error(transparent)]
    SeatState(#[from] SeatError),

    #[error("Minibus tickets are not refundable!")]
    NonRefundable,
}

/// A numeric argument outside its allowed range, or an unknown voyage kind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("{0} is not a positive integer, ID of a voyage must be a positive integer!")]
    VoyageId(i64),

    #[error(
        "{0} is not a positive integer, number of seat rows of a voyage must be a positive integer!"
    )]
    RowCount(i64),

    #[error("{} is too many seat rows, a voyage can have at most {} rows!", .0, MAX_ROWS)]
    TooManyRows(i64),

    #[error(
        "{} is not a positive number, price must be a positive number!",
        number(.0)
    )]
    SeatFee(f64),

    #[error(
        "{} is not a non-negative integer, premium fee must be a non-negative integer!",
        number(.0)
    )]
    PremiumFee(f64),

    #[error(
        "{} is not an integer that is in range of [0, 100], refund cut must be an integer that is in range of [0, 100]!",
        number(.0)
    )]
    RefundCut(f64),

    /// Reported as a misuse of the command that named it.
    #[error("Erroneous usage of \"INIT_VOYAGE\" command!")]
    UnknownKind,
}

/// A seat in a sale or refund batch that cannot take part in it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("{0} is not a positive integer, seat number must be a positive integer!")]
    NotPositive(i64),

    #[error("There is no such a seat!")]
    NoSuchSeat,

    #[error("One or more seats already sold!")]
    AlreadySold,

    #[error("One or more seats are already empty!")]
    AlreadyEmpty,
}

pub type Result<T> = core::result::Result<T, BookingError>;

/// Everything needed to open a voyage, as read from the command line.
///
/// Values are raw: range checks happen in [`BoxOffice::init_voyage`].
#[derive(Debug, Clone, PartialEq)]
pub struct VoyageRequest {
    pub kind: String,
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub rows: i64,
    pub fee: f64,
    pub refund_cut: Option<f64>,
    pub premium_fee: Option<f64>,
}

/// The run's voyages and the operations that change them.
#[derive(Debug)]
pub struct BoxOffice {
    voyages: Vec<Voyage>,
    currency: String,
}

impl BoxOffice {
    /// Creates an office with no voyages, quoting prices in `currency`.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            voyages: Vec::new(),
            currency: currency.into(),
        }
    }

    pub fn voyages(&self) -> &[Voyage] {
        &self.voyages
    }

    /// Opens a new voyage and confirms its layout and pricing.
    #[tracing::instrument(skip_all, fields(id = request.id, kind = %request.kind))]
    pub fn init_voyage(&mut self, request: VoyageRequest, out: &mut Transcript) -> Result<()> {
        let id = voyage_id(request.id)?;
        if self.voyages.iter().any(|v| v.id == id) {
            return Err(BookingError::DuplicateVoyage(id));
        }
        let rows =
            usize::try_from(request.rows).map_err(|_| InvalidArgument::RowCount(request.rows))?;
        if rows > MAX_ROWS {
            return Err(InvalidArgument::TooManyRows(request.rows).into());
        }
        if request.fee < 0.0 {
            return Err(InvalidArgument::SeatFee(request.fee).into());
        }
        let premium_fee = request.premium_fee.unwrap_or(0.0);
        if premium_fee < 0.0 {
            return Err(InvalidArgument::PremiumFee(premium_fee).into());
        }
        let refund_cut = request.refund_cut.unwrap_or(0.0);
        if !(0.0..=100.0).contains(&refund_cut) {
            return Err(InvalidArgument::RefundCut(refund_cut).into());
        }
        let kind = VoyageKind::from_name(&request.kind, refund_cut, premium_fee)
            .ok_or(InvalidArgument::UnknownKind)?;

        let voyage = Voyage::new(
            id,
            kind,
            request.origin,
            request.destination,
            request.fee,
            rows,
        );
        out.line(self.describe_opening(&voyage));
        tracing::info!(seats = voyage.seats().len(), "voyage opened");
        self.voyages.push(voyage);
        Ok(())
    }

    /// Sells every seat in `seats`, or none of them.
    #[tracing::instrument(skip(self, out))]
    pub fn sell_ticket(&mut self, id: i64, seats: &[i64], out: &mut Transcript) -> Result<()> {
        let index = self.position(id)?;
        let voyage = &mut self.voyages[index];
        let batch = check_batch(voyage, seats, SeatState::Empty)?;

        let total: f64 = batch.iter().map(|&seat| voyage.sell(seat)).sum();
        tracing::debug!(total, revenue = voyage.revenue(), "seats sold");
        out.line(format!(
            "Seat {} of the Voyage {} from {} to {} was successfully sold for {}.",
            join_seats(&batch),
            voyage.id,
            voyage.origin,
            voyage.destination,
            format_money(total, &self.currency),
        ));
        Ok(())
    }

    /// Refunds every seat in `seats`, or none of them.
    #[tracing::instrument(skip(self, out))]
    pub fn refund_ticket(&mut self, id: i64, seats: &[i64], out: &mut Transcript) -> Result<()> {
        let index = self.position(id)?;
        let voyage = &mut self.voyages[index];
        if !voyage.kind.is_refundable() {
            return Err(BookingError::NonRefundable);
        }
        let batch = check_batch(voyage, seats, SeatState::Sold)?;

        let total = batch
            .iter()
            .map(|&seat| voyage.refund(seat))
            .sum::<Option<f64>>()
            .ok_or(BookingError::NonRefundable)?;
        tracing::debug!(total, revenue = voyage.revenue(), "seats refunded");
        out.line(format!(
            "Seat {} of the Voyage {} from {} to {} was successfully refunded for {}.",
            join_seats(&batch),
            voyage.id,
            voyage.origin,
            voyage.destination,
            format_money(total, &self.currency),
        ));
        Ok(())
    }

    /// Reverses the full fee of every sold seat, shows the voyage's final state, and drops it.
    #[tracing::instrument(skip(self, out))]
    pub fn cancel_voyage(&mut self, id: i64, out: &mut Transcript) -> Result<()> {
        let index = self.position(id)?;
        let voyage = &mut self.voyages[index];

        let revoked = voyage.revoke_sales();
        tracing::info!(revoked, "voyage cancelled");
        out.line(format!("Voyage {} was successfully cancelled!", voyage.id));
        out.line("Voyage details can be found below:");
        ledger::render_voyage(voyage, out);

        self.voyages.remove(index);
        Ok(())
    }

    /// Shows a voyage's seat map and revenue.
    pub fn print_voyage(&self, id: i64, out: &mut Transcript) -> Result<()> {
        let index = self.position(id)?;
        ledger::render_voyage(&self.voyages[index], out);
        Ok(())
    }

    /// Writes the Z report over all voyages, in id order.
    pub fn z_report(&mut self, out: &mut Transcript, segment: Segment) {
        ledger::z_report(&mut self.voyages, out, segment);
    }

    pub fn sort_voyages(&mut self) {
        self.voyages.sort_by_key(|v| v.id);
    }

    fn position(&self, id: i64) -> Result<usize> {
        let id = voyage_id(id)?;
        self.voyages
            .iter()
            .position(|v| v.id == id)
            .ok_or(BookingError::VoyageNotFound(id))
    }

    fn describe_opening(&self, voyage: &Voyage) -> String {
        let fee = format_money(voyage.base_fee(), &self.currency);
        let route = format!("from {} to {}", voyage.origin, voyage.destination);
        match voyage.kind {
            VoyageKind::Standard { refund_cut } => format!(
                "Voyage {} was initialized as a standard (2+2) voyage {route} with {fee} priced {} regular seats. \
                 Note that refunds will be {}% less than the paid amount.",
                voyage.id,
                voyage.seats().len(),
                ledger::fixed_point(refund_cut, 0),
            ),
            VoyageKind::Premium { refund_cut, .. } => {
                let lead_seat = voyage.seat_fee(SeatNumber::FIRST);
                format!(
                    "Voyage {} was initialized as a premium (1+2) voyage {route} with {fee} priced {} regular seats \
                     and {} priced {} premium seats. Note that refunds will be {}% less than the paid amount.",
                    voyage.id,
                    voyage.rows() * 2,
                    format_money(lead_seat, &self.currency),
                    voyage.rows(),
                    ledger::fixed_point(refund_cut, 0),
                )
            }
            VoyageKind::Minibus => format!(
                "Voyage {} was initialized as a minibus (2) voyage {route} with {fee} priced {} regular seats. \
                 Note that minibus tickets are not refundable.",
                voyage.id,
                voyage.seats().len(),
            ),
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // thiserror hands fields over by reference.
fn number(value: &f64) -> String {
    ledger::format_number(*value)
}

fn voyage_id(raw: i64) -> Result<VoyageId> {
    VoyageId::try_from(raw).map_err(|_| InvalidArgument::VoyageId(raw).into())
}

/// Checks a whole batch against the state every seat must be in.
///
/// A seat listed twice fails the second time, as if the first had already gone through.
fn check_batch(
    voyage: &Voyage,
    seats: &[i64],
    required: SeatState,
) -> core::result::Result<Vec<SeatNumber>, SeatError> {
    let mut batch = Vec::with_capacity(seats.len());
    for &raw in seats {
        if raw < 1 {
            return Err(SeatError::NotPositive(raw));
        }
        let seat = u32::try_from(raw)
            .ok()
            .and_then(SeatNumber::new)
            .ok_or(SeatError::NoSuchSeat)?;
        let state = voyage
            .seat_state(seat)
            .ok_or(SeatError::NoSuchSeat)?;
        if state != required || batch.contains(&seat) {
            return Err(match required {
                SeatState::Empty => SeatError::AlreadySold,
                SeatState::Sold => SeatError::AlreadyEmpty,
            });
        }
        batch.push(seat);
    }
    Ok(batch)
}

fn join_seats(seats: &[SeatNumber]) -> String {
    seats
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("-")
}
