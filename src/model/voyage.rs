//! Voyage types: one scheduled trip with its own seat inventory.

use super::{SeatNumber, SeatState};

/// Identifier of a voyage, unique among the voyages of a run.
pub type VoyageId = u64;

/// Most seat rows a single voyage may have.
pub const MAX_ROWS: usize = 100_000;

/// The kind of voyage, carrying the pricing parameters that kind uses.
///
/// Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoyageKind {
    /// Four seats per row in a 2+2 layout.
    Standard {
        /// Percentage withheld from refunds.
        refund_cut: f64,
    },

    /// Three seats per row in a 1+2 layout.
    /// The single seat on the left of each row carries a surcharge.
    Premium {
        /// Percentage withheld from refunds.
        refund_cut: f64,

        /// Percentage added to the lead seat of each row.
        premium_fee: f64,
    },

    /// Two seats per row. Tickets are never refundable.
    Minibus,
}

impl VoyageKind {
    /// Resolves a kind by its command-line name.
    ///
    /// Minibus voyages ignore both percentages.
    pub fn from_name(name: &str, refund_cut: f64, premium_fee: f64) -> Option<Self> {
        match name {
            "Standard" => Some(Self::Standard { refund_cut }),
            "Premium" => Some(Self::Premium {
                refund_cut,
                premium_fee,
            }),
            "Minibus" => Some(Self::Minibus),
            _ => None,
        }
    }

    pub fn seats_per_row(self) -> u32 {
        match self {
            Self::Standard { .. } => 4,
            Self::Premium { .. } => 3,
            Self::Minibus => 2,
        }
    }

    /// Column before which the aisle is drawn in seat maps, if the layout has one.
    pub fn aisle_before(self) -> Option<usize> {
        match self {
            Self::Standard { .. } => Some(2),
            Self::Premium { .. } => Some(1),
            Self::Minibus => None,
        }
    }

    /// Price of a seat given the voyage's base fee.
    pub fn seat_fee(self, base_fee: f64, seat: SeatNumber) -> f64 {
        match self {
            Self::Premium { premium_fee, .. } if seat.column(self.seats_per_row()) == 0 => {
                base_fee * (100.0 + premium_fee) / 100.0
            }
            _ => base_fee,
        }
    }

    /// Amount paid back when a seat sold for `fee` is refunded.
    ///
    /// `None` for kinds that do not accept refunds.
    pub fn refund_payout(self, fee: f64) -> Option<f64> {
        match self {
            Self::Standard { refund_cut } | Self::Premium { refund_cut, .. } => {
                Some((100.0 - refund_cut) * fee / 100.0)
            }
            Self::Minibus => None,
        }
    }

    pub fn is_refundable(self) -> bool {
        !matches!(self, Self::Minibus)
    }
}

/// One scheduled trip: route, pricing, seats, and the revenue they brought in.
///
/// Seats and revenue are private: the seat count never changes after
/// construction, and revenue moves only through [`Voyage::sell`],
/// [`Voyage::refund`], and [`Voyage::revoke_sales`].
#[derive(Debug, Clone, PartialEq)]
pub struct Voyage {
    pub id: VoyageId,
    pub kind: VoyageKind,
    pub origin: String,
    pub destination: String,
    base_fee: f64,
    rows: usize,
    seats: Vec<SeatState>,
    revenue: f64,
}

impl Voyage {
    /// Creates a voyage with every seat empty and no revenue.
    ///
    /// `rows` is at most [`MAX_ROWS`].
    pub fn new(
        id: VoyageId,
        kind: VoyageKind,
        origin: impl Into<String>,
        destination: impl Into<String>,
        base_fee: f64,
        rows: usize,
    ) -> Self {
        let seat_count = rows * kind.seats_per_row() as usize;
        Self {
            id,
            kind,
            origin: origin.into(),
            destination: destination.into(),
            base_fee,
            rows,
            seats: vec![SeatState::Empty; seat_count],
            revenue: 0.0,
        }
    }

    pub fn base_fee(&self) -> f64 {
        self.base_fee
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats(&self) -> &[SeatState] {
        &self.seats
    }

    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    /// State of a seat, or `None` if the voyage has no such seat.
    pub fn seat_state(&self, seat: SeatNumber) -> Option<SeatState> {
        self.seats.get(seat.index()).copied()
    }

    pub fn seat_fee(&self, seat: SeatNumber) -> f64 {
        self.kind.seat_fee(self.base_fee, seat)
    }

    /// Marks a seat sold and books its fee. Returns the fee.
    ///
    /// The caller has already checked that the seat exists and is empty.
    pub(crate) fn sell(&mut self, seat: SeatNumber) -> f64 {
        let fee = self.seat_fee(seat);
        self.seats[seat.index()] = SeatState::Sold;
        self.revenue += fee;
        fee
    }

    /// Empties a sold seat and pays back its refund. Returns the payout.
    ///
    /// `None`, with nothing changed, if this kind of voyage does not refund.
    pub(crate) fn refund(&mut self, seat: SeatNumber) -> Option<f64> {
        let payout = self.kind.refund_payout(self.seat_fee(seat))?;
        self.seats[seat.index()] = SeatState::Empty;
        self.revenue -= payout;
        Some(payout)
    }

    /// Reverses the full fee of every sold seat. Returns the amount reversed.
    ///
    /// Seat states are left as they are; a cancelled voyage keeps showing what was sold.
    pub(crate) fn revoke_sales(&mut self) -> f64 {
        let revoked: f64 = (1..)
            .filter_map(SeatNumber::new)
            .zip(&self.seats)
            .filter(|(_, state)| **state == SeatState::Sold)
            .map(|(seat, _)| self.kind.seat_fee(self.base_fee, seat))
            .sum();
        self.revenue -= revoked;
        revoked
    }
}
