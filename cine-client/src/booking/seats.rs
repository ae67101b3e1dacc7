//! Seat picking for one showtime

use std::collections::BTreeSet;

use serde::Serialize;
use shared::models::{Seat, SeatId, SeatStatus};

/// What a seat looks like on the seat map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatDisplay {
    Available,
    Reserved,
    Selected,
}

/// Result of clicking a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected,
    Deselected,
    /// Selection already holds one seat per ticket; nothing changed
    Full,
    /// Reserved or not part of the hall; nothing changed
    Unavailable,
}

/// Selected seats, never more than the ticket count
#[derive(Debug, Clone)]
pub struct SeatSelection {
    seats: Vec<Seat>,
    ticket_count: usize,
    selected: BTreeSet<SeatId>,
}

impl SeatSelection {
    pub fn new(seats: Vec<Seat>, ticket_count: usize) -> Self {
        Self {
            seats,
            ticket_count,
            selected: BTreeSet::new(),
        }
    }

    pub fn ticket_count(&self) -> usize {
        self.ticket_count
    }

    /// Any call clears the selection, including one with the same count
    pub fn set_ticket_count(&mut self, ticket_count: usize) {
        self.ticket_count = ticket_count;
        self.selected.clear();
    }

    pub fn click(&mut self, id: SeatId) -> ClickOutcome {
        if self.selected.remove(&id) {
            return ClickOutcome::Deselected;
        }
        if !self.seat(id).is_some_and(Seat::is_available) {
            return ClickOutcome::Unavailable;
        }
        if self.selected.len() >= self.ticket_count {
            return ClickOutcome::Full;
        }
        self.selected.insert(id);
        ClickOutcome::Selected
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.selected.iter().copied()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: SeatId) -> bool {
        self.selected.contains(&id)
    }

    /// One seat chosen per ticket
    pub fn is_complete(&self) -> bool {
        self.ticket_count > 0 && self.selected.len() == self.ticket_count
    }

    fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id() == id)
    }

    /// `None` for seats outside the hall
    pub fn display(&self, id: SeatId) -> Option<SeatDisplay> {
        let seat = self.seat(id)?;
        Some(if self.selected.contains(&id) {
            SeatDisplay::Selected
        } else {
            match seat.status {
                SeatStatus::Available => SeatDisplay::Available,
                SeatStatus::Reserved => SeatDisplay::Reserved,
            }
        })
    }

    /// Hall layout with display status, in server order
    pub fn seat_map(&self) -> impl Iterator<Item = (SeatId, SeatDisplay)> + '_ {
        self.seats.iter().filter_map(|s| {
            let id = s.id();
            self.display(id).map(|d| (id, d))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall() -> Vec<Seat> {
        let mut seats = Vec::new();
        for row in ['A', 'B'] {
            for column in 1..=4 {
                let status = if row == 'B' && column == 2 {
                    SeatStatus::Reserved
                } else {
                    SeatStatus::Available
                };
                seats.push(Seat {
                    row,
                    column,
                    status,
                });
            }
        }
        seats
    }

    fn id(label: &str) -> SeatId {
        label.parse().unwrap()
    }

    #[test]
    fn test_select_up_to_ticket_count() {
        let mut sel = SeatSelection::new(hall(), 2);
        assert_eq!(sel.click(id("A1")), ClickOutcome::Selected);
        assert_eq!(sel.click(id("A2")), ClickOutcome::Selected);
        assert!(sel.is_complete());

        assert_eq!(sel.click(id("A3")), ClickOutcome::Full);
        assert_eq!(sel.selected_count(), 2);
        assert!(!sel.is_selected(id("A3")));
    }

    #[test]
    fn test_deselect_always_works() {
        let mut sel = SeatSelection::new(hall(), 1);
        sel.click(id("A1"));
        assert_eq!(sel.click(id("A1")), ClickOutcome::Deselected);
        assert_eq!(sel.selected_count(), 0);
    }

    #[test]
    fn test_reserved_and_unknown_seats_are_no_ops() {
        let mut sel = SeatSelection::new(hall(), 3);
        assert_eq!(sel.click(id("B2")), ClickOutcome::Unavailable);
        assert_eq!(sel.click(id("Z9")), ClickOutcome::Unavailable);
        assert_eq!(sel.selected_count(), 0);
        assert_eq!(sel.display(id("B2")), Some(SeatDisplay::Reserved));
        assert_eq!(sel.display(id("Z9")), None);
    }

    #[test]
    fn test_ticket_count_change_clears_selection() {
        let mut sel = SeatSelection::new(hall(), 3);
        sel.click(id("A1"));
        sel.click(id("A2"));
        sel.click(id("A3"));

        sel.set_ticket_count(1);
        assert_eq!(sel.selected_count(), 0);
        assert_eq!(sel.display(id("A1")), Some(SeatDisplay::Available));

        sel.click(id("A4"));
        sel.set_ticket_count(1);
        assert_eq!(sel.selected_count(), 0);
    }

    #[test]
    fn test_seat_map_statuses() {
        let mut sel = SeatSelection::new(hall(), 1);
        sel.click(id("a3"));
        let map: Vec<_> = sel.seat_map().collect();
        assert_eq!(map.len(), 8);
        assert!(map.contains(&(id("A3"), SeatDisplay::Selected)));
        assert!(map.contains(&(id("B2"), SeatDisplay::Reserved)));
        assert!(map.contains(&(id("B4"), SeatDisplay::Available)));
    }
}
