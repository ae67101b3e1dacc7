//! Seat Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Position of a seat: row letter plus 1-based column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId {
    pub row: char,
    pub column: u32,
}

impl SeatId {
    pub fn new(row: char, column: u32) -> Self {
        Self {
            row: row.to_ascii_uppercase(),
            column,
        }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

impl FromStr for SeatId {
    type Err = AppError;

    /// Parses labels such as `A5` or `c12`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let invalid = || {
            AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid seat label: {}", s))
        };
        let row = chars.next().filter(|c| c.is_ascii_alphabetic()).ok_or_else(invalid)?;
        let column: u32 = chars.as_str().parse().map_err(|_| invalid())?;
        if column == 0 {
            return Err(invalid());
        }
        Ok(SeatId::new(row, column))
    }
}

/// Server-side seat availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    #[default]
    #[serde(alias = "free")]
    Available,
    #[serde(alias = "booked", alias = "occupied", alias = "unavailable")]
    Reserved,
}

/// Seat of a showtime's hall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub row: char,
    pub column: u32,
    #[serde(default)]
    pub status: SeatStatus,
}

impl Seat {
    pub fn id(&self) -> SeatId {
        SeatId::new(self.row, self.column)
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_parse_and_display() {
        let id: SeatId = "c12".parse().unwrap();
        assert_eq!(id, SeatId::new('C', 12));
        assert_eq!(id.to_string(), "C12");
        assert!("12".parse::<SeatId>().is_err());
        assert!("A".parse::<SeatId>().is_err());
        assert!("A0".parse::<SeatId>().is_err());
    }

    #[test]
    fn test_seat_ordering_row_major() {
        let mut seats = vec![SeatId::new('B', 1), SeatId::new('A', 10), SeatId::new('A', 2)];
        seats.sort();
        assert_eq!(
            seats,
            vec![SeatId::new('A', 2), SeatId::new('A', 10), SeatId::new('B', 1)]
        );
    }

    #[test]
    fn test_seat_status_aliases() {
        let seat: Seat = serde_json::from_str(r#"{"row":"A","column":1,"status":"booked"}"#).unwrap();
        assert_eq!(seat.status, SeatStatus::Reserved);
        let seat: Seat = serde_json::from_str(r#"{"row":"A","column":2}"#).unwrap();
        assert!(seat.is_available());
    }
}
