//! Ticket purchase wizard
//!
//! A [`BookingSession`] walks `Tickets -> Seats -> Products -> Summary` for one
//! showtime. Nothing here talks to the server; the shell submits the final
//! [`BookingSummary`] however its backend expects it.

mod pricing;
mod products;
mod seats;

pub use pricing::{PriceBreakdown, price};
pub use products::{ProductLine, ProductSelection};
pub use seats::{ClickOutcome, SeatDisplay, SeatSelection};

use rust_decimal::Decimal;
use serde::Serialize;
use shared::ErrorCode;
use shared::models::{Product, SeatId, Showtime};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Booking rule violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Choose between 1 and {max} tickets (got {requested})")]
    TicketCountInvalid { requested: usize, max: usize },

    #[error("All {tickets} tickets already have a seat")]
    SeatLimitReached { tickets: usize },

    #[error("Seat {0} is not available")]
    SeatUnavailable(SeatId),

    #[error("Select {required} seats ({selected} selected)")]
    SeatSelectionIncomplete { selected: usize, required: usize },

    #[error("Cannot leave the {0:?} step yet")]
    StepBlocked(BookingStep),

    #[error("Booking total is too large")]
    PriceOverflow,
}

impl BookingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::TicketCountInvalid { .. } => ErrorCode::TicketCountInvalid,
            BookingError::SeatLimitReached { .. } => ErrorCode::SeatLimitReached,
            BookingError::SeatUnavailable(_) => ErrorCode::SeatUnavailable,
            BookingError::SeatSelectionIncomplete { .. } => ErrorCode::SeatSelectionIncomplete,
            BookingError::StepBlocked(_) => ErrorCode::BookingStepBlocked,
            BookingError::PriceOverflow => ErrorCode::PriceOverflow,
        }
    }
}

// ============================================================================
// Steps
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    Tickets,
    Seats,
    Products,
    Summary,
}

impl BookingStep {
    fn next(self) -> Option<Self> {
        match self {
            BookingStep::Tickets => Some(BookingStep::Seats),
            BookingStep::Seats => Some(BookingStep::Products),
            BookingStep::Products => Some(BookingStep::Summary),
            BookingStep::Summary => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            BookingStep::Tickets => None,
            BookingStep::Seats => Some(BookingStep::Tickets),
            BookingStep::Products => Some(BookingStep::Seats),
            BookingStep::Summary => Some(BookingStep::Products),
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Everything the summary screen renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub showtime_id: String,
    pub movie_title: Option<String>,
    pub seats: Vec<SeatId>,
    #[serde(with = "rust_decimal::serde::float")]
    pub ticket_price: Decimal,
    pub products: Vec<ProductLine>,
    pub price: PriceBreakdown,
}

// ============================================================================
// Session
// ============================================================================

/// Booking wizard state for one showtime
#[derive(Debug, Clone)]
pub struct BookingSession {
    showtime: Showtime,
    ticket_price: Decimal,
    max_tickets: usize,
    step: BookingStep,
    seats: SeatSelection,
    products: ProductSelection,
}

impl BookingSession {
    /// `ticket_price` is charged per seat as given; callers decide whether a
    /// showtime's own price wins
    pub fn new(showtime: Showtime, ticket_price: Decimal, max_tickets: usize) -> Self {
        let seats = SeatSelection::new(showtime.seats.clone(), 0);
        Self {
            showtime,
            ticket_price,
            max_tickets,
            step: BookingStep::Tickets,
            seats,
            products: ProductSelection::new(),
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn showtime(&self) -> &Showtime {
        &self.showtime
    }

    pub fn ticket_price(&self) -> Decimal {
        self.ticket_price
    }

    pub fn ticket_count(&self) -> usize {
        self.seats.ticket_count()
    }

    pub fn seats(&self) -> &SeatSelection {
        &self.seats
    }

    pub fn products(&self) -> &ProductSelection {
        &self.products
    }

    /// Changes the count and clears the seat selection
    pub fn set_ticket_count(&mut self, count: usize) {
        self.seats.set_ticket_count(count);
    }

    /// Click a seat; a no-op click reports why
    pub fn click_seat(&mut self, id: SeatId) -> Result<ClickOutcome, BookingError> {
        match self.seats.click(id) {
            ClickOutcome::Full => Err(BookingError::SeatLimitReached {
                tickets: self.seats.ticket_count(),
            }),
            ClickOutcome::Unavailable => Err(BookingError::SeatUnavailable(id)),
            outcome => Ok(outcome),
        }
    }

    pub fn set_product_amount(&mut self, product: &Product, amount: u32) {
        self.products.set_amount(product, amount);
    }

    pub fn products_mut(&mut self) -> &mut ProductSelection {
        &mut self.products
    }

    pub fn price(&self) -> Result<PriceBreakdown, BookingError> {
        price(self.ticket_price, self.seats.selected_count(), &self.products)
    }

    fn check_step(&self) -> Result<(), BookingError> {
        match self.step {
            BookingStep::Tickets => {
                let requested = self.ticket_count();
                if requested == 0 || requested > self.max_tickets {
                    return Err(BookingError::TicketCountInvalid {
                        requested,
                        max: self.max_tickets,
                    });
                }
            }
            BookingStep::Seats => {
                if !self.seats.is_complete() {
                    return Err(BookingError::SeatSelectionIncomplete {
                        selected: self.seats.selected_count(),
                        required: self.ticket_count(),
                    });
                }
            }
            BookingStep::Products => {}
            BookingStep::Summary => return Err(BookingError::StepBlocked(self.step)),
        }
        Ok(())
    }

    /// Advance one step if the current step is satisfied
    pub fn next(&mut self) -> Result<BookingStep, BookingError> {
        self.check_step()?;
        let next = self.step.next().ok_or(BookingError::StepBlocked(self.step))?;
        tracing::debug!(from = ?self.step, to = ?next, "booking step");
        self.step = next;
        Ok(next)
    }

    /// Go back one step; a no-op on `Tickets`
    pub fn back(&mut self) -> BookingStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Summary of a booking that passed every step guard
    pub fn summary(&self) -> Result<BookingSummary, BookingError> {
        if self.step != BookingStep::Summary {
            return Err(BookingError::StepBlocked(self.step));
        }
        Ok(BookingSummary {
            showtime_id: self.showtime.id.clone(),
            movie_title: self.showtime.movie_title().map(String::from),
            seats: self.seats.selected().collect(),
            ticket_price: self.ticket_price,
            products: self.products.lines()?,
            price: self.price()?,
        })
    }
}
