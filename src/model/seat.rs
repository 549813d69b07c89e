//! Seat types: a seat's position on the bus and whether it is taken.

use std::fmt;

/// Occupancy of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatState {
    Empty,
    Sold,
}

impl SeatState {
    /// The glyph used in rendered seat maps.
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '*',
            Self::Sold => 'X',
        }
    }
}

/// A 1-based seat number, as it appears in commands and confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeatNumber(u32);

impl SeatNumber {
    pub const FIRST: Self = Self(1);

    /// Returns `None` for zero; seat numbering starts at 1.
    pub fn new(number: u32) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    /// Position within the voyage's seat vector.
    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Position within its row, counting from 0.
    pub(crate) fn column(self, seats_per_row: u32) -> u32 {
        (self.0 - 1) % seats_per_row
    }
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
