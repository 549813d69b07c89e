//! Core data model for the box office.
//!
//! A voyage owns its seat inventory and its running revenue.
//! Pricing and layout rules live on [`VoyageKind`], so every kind-specific
//! decision is a `match` on one enum rather than scattered across types.

mod seat;
mod voyage;

pub use seat::{SeatNumber, SeatState};
pub use voyage::{MAX_ROWS, Voyage, VoyageId, VoyageKind};
