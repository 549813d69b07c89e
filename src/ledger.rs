//! Seat maps, revenue, and the Z report.
//!
//! Rendering only reads voyages; the one exception is the Z report, which
//! sorts the collection by id before listing it.

use std::iter;

use crate::model::{SeatState, Voyage, VoyageKind};
use crate::transcript::Transcript;

/// Closes every voyage listing in a report.
pub const SEPARATOR: &str = "----------------";

const REPORT_HEADER: &str = "Z Report:";
const NO_VOYAGES: &str = "No Voyages Available!";

/// Where a report sits in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// More output may follow.
    Middle,

    /// The report is the last thing written; its closing separator has no line break.
    Final,
}

/// Formats a number as a plain integer when it has no fractional part,
/// otherwise with exactly two decimals.
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        fixed_point(value, 0)
    } else {
        fixed_point(value, 2)
    }
}

/// Formats a money amount as it appears in confirmations: `120.00 TL`.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{} {currency}", fixed_point(amount, 2))
}

/// Writes `value` with exactly `decimals` places, rounding ties away from zero.
///
/// Rounding works on the shortest decimal form of `value`, so `1.005` gives
/// `1.01` even though the nearest double sits just below it.
pub fn fixed_point(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let shortest = value.abs().to_string();
    let (whole, fraction) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(iter::repeat(b'0')).take(decimals))
        .collect();
    if fraction.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        carry(&mut digits);
    }

    let point = digits.len() - decimals;
    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() && digits.iter().any(|&d| d != b'0') {
        text.push('-');
    }
    for (i, digit) in digits.into_iter().enumerate() {
        if i == point {
            text.push('.');
        }
        text.push(char::from(digit));
    }
    text
}

/// Adds one to the last digit of a decimal digit string.
fn carry(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Writes a voyage's header, seat map, and revenue.
pub fn render_voyage(voyage: &Voyage, out: &mut Transcript) {
    out.line(format!("Voyage {}", voyage.id));
    out.line(format!("{}-{}", voyage.origin, voyage.destination));
    let width = voyage.kind.seats_per_row() as usize;
    for row in voyage.seats().chunks(width) {
        out.line(render_row(row, voyage.kind));
    }
    out.line(format!("Revenue: {}", format_number(voyage.revenue())));
}

/// One row of a seat map, e.g. `X * | * X`.
fn render_row(row: &[SeatState], kind: VoyageKind) -> String {
    let aisle = kind.aisle_before();
    let mut line = String::with_capacity(row.len() * 4);
    for (column, seat) in row.iter().enumerate() {
        if column > 0 {
            line.push_str(if aisle == Some(column) { " | " } else { " " });
        }
        line.push(seat.symbol());
    }
    line
}

/// Lists every voyage in id order, each closed by a separator line.
pub fn aggregate_report(voyages: &mut [Voyage], out: &mut Transcript, segment: Segment) {
    voyages.sort_by_key(|v| v.id);

    let Some((last, rest)) = voyages.split_last() else {
        out.line(NO_VOYAGES);
        close(out, segment);
        return;
    };
    for voyage in rest {
        render_voyage(voyage, out);
        out.line(SEPARATOR);
    }
    render_voyage(last, out);
    close(out, segment);
}

/// Writes a titled aggregate report.
pub fn z_report(voyages: &mut [Voyage], out: &mut Transcript, segment: Segment) {
    out.line(REPORT_HEADER);
    out.line(SEPARATOR);
    aggregate_report(voyages, out, segment);
}

fn close(out: &mut Transcript, segment: Segment) {
    match segment {
        Segment::Middle => out.line(SEPARATOR),
        Segment::Final => out.last_line(SEPARATOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::SeatNumber;

    fn seat(n: u32) -> SeatNumber {
        SeatNumber::new(n).unwrap()
    }

    fn standard(id: u64) -> Voyage {
        Voyage::new(
            id,
            VoyageKind::Standard { refund_cut: 10.0 },
            "Ist",
            "Ank",
            100.0,
            1,
        )
    }

    #[test]
    fn format_number_drops_zero_fraction() {
        assert_eq!(format_number(200.0), "200");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-40.0), "-40");
        assert_eq!(format_number(112.5), "112.50");
        assert_eq!(format_number(33.333), "33.33");
    }

    #[test]
    fn format_money_always_has_two_decimals() {
        assert_eq!(format_money(200.0, "TL"), "200.00 TL");
        assert_eq!(format_money(7.5, "EUR"), "7.50 EUR");
        assert_eq!(format_money(1.125, "TL"), "1.13 TL");
    }

    #[test]
    fn fixed_point_rounds_ties_away_from_zero() {
        let cases = [
            (1.125, 2, "1.13"),
            (12.5, 0, "13"),
            (2.5, 0, "3"),
            (0.5, 0, "1"),
            (1.005, 2, "1.01"),
            (9.995, 2, "10.00"),
            (99.5, 0, "100"),
            (1.124, 2, "1.12"),
            (100.0, 2, "100.00"),
            (0.0, 2, "0.00"),
            (0.000_000_1, 2, "0.00"),
            (-2.5, 0, "-3"),
            (-0.001, 2, "0.00"),
        ];
        for (value, decimals, expected) in cases {
            assert_eq!(fixed_point(value, decimals), expected, "{value} to {decimals} places");
        }
    }

    #[test]
    fn format_number_rounds_half_cents_up() {
        assert_eq!(format_number(112.125), "112.13");
        assert_eq!(format_number(0.005), "0.01");
    }

    #[test]
    fn renders_standard_voyage_with_aisle_after_second_seat() {
        let mut voyage = standard(1);
        voyage.sell(seat(1));
        voyage.sell(seat(2));

        let mut out = Transcript::new();
        render_voyage(&voyage, &mut out);

        assert_eq!(
            out.as_str(),
            "Voyage 1\nIst-Ank\nX X | * *\nRevenue: 200\n"
        );
    }

    #[test]
    fn renders_premium_and_minibus_rows() {
        let premium = VoyageKind::Premium {
            refund_cut: 0.0,
            premium_fee: 20.0,
        };
        let mut voyage = Voyage::new(2, premium, "A", "B", 100.0, 2);
        voyage.sell(seat(4));
        let mut out = Transcript::new();
        render_voyage(&voyage, &mut out);
        assert_eq!(out.as_str(), "Voyage 2\nA-B\n* | * *\nX | * *\nRevenue: 120\n");

        let mut voyage = Voyage::new(3, VoyageKind::Minibus, "C", "D", 12.5, 1);
        voyage.sell(seat(2));
        let mut out = Transcript::new();
        render_voyage(&voyage, &mut out);
        assert_eq!(out.as_str(), "Voyage 3\nC-D\n* X\nRevenue: 12.50\n");
    }

    #[test]
    fn voyage_without_rows_renders_no_seat_lines() {
        let voyage = Voyage::new(4, VoyageKind::Minibus, "E", "F", 10.0, 0);
        let mut out = Transcript::new();
        render_voyage(&voyage, &mut out);
        assert_eq!(out.as_str(), "Voyage 4\nE-F\nRevenue: 0\n");
    }

    #[test]
    fn aggregate_report_sorts_by_id() {
        let mut voyages = vec![standard(7), standard(2)];
        let mut out = Transcript::new();
        aggregate_report(&mut voyages, &mut out, Segment::Middle);

        assert_eq!(voyages[0].id, 2);
        assert_eq!(
            out.as_str(),
            "Voyage 2\nIst-Ank\n* * | * *\nRevenue: 0\n----------------\n\
             Voyage 7\nIst-Ank\n* * | * *\nRevenue: 0\n----------------\n"
        );
    }

    #[test]
    fn final_report_omits_last_line_break() {
        let mut voyages = vec![standard(1)];
        let mut out = Transcript::new();
        aggregate_report(&mut voyages, &mut out, Segment::Final);
        assert!(out.as_str().ends_with("Revenue: 0\n----------------"));
    }

    #[test]
    fn empty_z_report() {
        let mut out = Transcript::new();
        z_report(&mut [], &mut out, Segment::Middle);
        assert_eq!(
            out.as_str(),
            "Z Report:\n----------------\nNo Voyages Available!\n----------------\n"
        );

        let mut out = Transcript::new();
        z_report(&mut [], &mut out, Segment::Final);
        assert_eq!(
            out.as_str(),
            "Z Report:\n----------------\nNo Voyages Available!\n----------------"
        );
    }
}
