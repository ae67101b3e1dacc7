//! Booking totals

use rust_decimal::Decimal;
use serde::Serialize;

use super::BookingError;
use super::products::ProductSelection;

/// Price breakdown of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub tickets: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub products: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// `ticket_price × seats + Σ(price × amount)`
pub fn price(
    ticket_price: Decimal,
    seats: usize,
    products: &ProductSelection,
) -> Result<PriceBreakdown, BookingError> {
    let tickets = ticket_price
        .checked_mul(Decimal::from(seats))
        .ok_or(BookingError::PriceOverflow)?;
    let products = products.subtotal()?;
    let total = tickets
        .checked_add(products)
        .ok_or(BookingError::PriceOverflow)?;
    Ok(PriceBreakdown {
        tickets,
        products,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Product;

    #[test]
    fn test_total_is_exact() {
        let mut products = ProductSelection::new();
        products.set_amount(
            &Product {
                id: Some("p1".into()),
                name: "Popcorn".into(),
                price: Decimal::new(550, 2),
                image: None,
            },
            2,
        );
        let breakdown = price(Decimal::new(890, 2), 3, &products).unwrap();
        assert_eq!(breakdown.tickets, Decimal::new(2670, 2));
        assert_eq!(breakdown.products, Decimal::new(1100, 2));
        assert_eq!(breakdown.total, Decimal::new(3770, 2));
    }

    #[test]
    fn test_no_seats_no_products() {
        let breakdown = price(Decimal::new(9, 0), 0, &ProductSelection::new()).unwrap();
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn test_ticket_total_overflow() {
        assert_eq!(
            price(Decimal::MAX, 2, &ProductSelection::new()),
            Err(BookingError::PriceOverflow)
        );
    }
}
