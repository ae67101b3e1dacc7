//! Concession picking

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::Product;

use super::BookingError;

/// Priced line of the product selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductLine {
    pub key: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub amount: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Product amounts in the order products were first touched
///
/// Entries are keyed by [`Product::key`]. Setting an amount to 0 keeps the
/// entry; zero entries are skipped by [`ProductSelection::lines`] and the
/// totals, and [`ProductSelection::prune_zero`] drops them.
#[derive(Debug, Clone, Default)]
pub struct ProductSelection {
    entries: Vec<(Product, u32)>,
}

impl ProductSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_amount(&mut self, product: &Product, amount: u32) {
        match self.entry_mut(product.key()) {
            Some(entry) => {
                entry.0 = product.clone();
                entry.1 = amount;
            }
            None => self.entries.push((product.clone(), amount)),
        }
    }

    pub fn increment(&mut self, product: &Product) {
        let amount = self.amount(product.key()).saturating_add(1);
        self.set_amount(product, amount);
    }

    pub fn decrement(&mut self, product: &Product) {
        let amount = self.amount(product.key()).saturating_sub(1);
        self.set_amount(product, amount);
    }

    pub fn amount(&self, key: &str) -> u32 {
        self.entries
            .iter()
            .find(|(p, _)| p.key() == key)
            .map_or(0, |(_, amount)| *amount)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut (Product, u32)> {
        self.entries.iter_mut().find(|(p, _)| p.key() == key)
    }

    /// Every entry, zero amounts included
    pub fn entries(&self) -> impl Iterator<Item = (&Product, u32)> {
        self.entries.iter().map(|(p, amount)| (p, *amount))
    }

    pub fn prune_zero(&mut self) {
        self.entries.retain(|(_, amount)| *amount > 0);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// True when no product has a positive amount
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, amount)| *amount == 0)
    }

    pub fn lines(&self) -> Result<Vec<ProductLine>, BookingError> {
        self.entries
            .iter()
            .filter(|(_, amount)| *amount > 0)
            .map(|(p, amount)| {
                Ok(ProductLine {
                    key: p.key().to_string(),
                    name: p.name.clone(),
                    unit_price: p.price,
                    amount: *amount,
                    subtotal: line_total(p, *amount)?,
                })
            })
            .collect()
    }

    pub fn item_count(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, amount)| acc.saturating_add(u64::from(*amount)))
    }

    pub fn subtotal(&self) -> Result<Decimal, BookingError> {
        self.entries.iter().try_fold(Decimal::ZERO, |acc, (p, amount)| {
            acc.checked_add(line_total(p, *amount)?)
                .ok_or(BookingError::PriceOverflow)
        })
    }
}

fn line_total(product: &Product, amount: u32) -> Result<Decimal, BookingError> {
    product
        .price
        .checked_mul(Decimal::from(amount))
        .ok_or(BookingError::PriceOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: Option<&str>, name: &str, price: i64) -> Product {
        Product {
            id: id.map(String::from),
            name: name.into(),
            price: Decimal::from(price),
            image: None,
        }
    }

    fn state(sel: &ProductSelection) -> Vec<(String, u32)> {
        sel.entries().map(|(p, a)| (p.name.clone(), a)).collect()
    }

    #[test]
    fn test_popcorn_and_soda() {
        let popcorn = product(None, "Popcorn", 5);
        let soda = product(None, "Soda", 2);
        let mut sel = ProductSelection::new();

        sel.set_amount(&popcorn, 3);
        sel.set_amount(&soda, 2);
        assert_eq!(state(&sel), vec![("Popcorn".into(), 3), ("Soda".into(), 2)]);
        assert_eq!(sel.subtotal(), Ok(Decimal::from(19)));

        sel.set_amount(&popcorn, 0);
        assert_eq!(state(&sel), vec![("Popcorn".into(), 0), ("Soda".into(), 2)]);
        let lines = sel.lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Soda");
        assert_eq!(lines[0].subtotal, Decimal::from(4));

        sel.prune_zero();
        assert_eq!(state(&sel), vec![("Soda".into(), 2)]);
    }

    #[test]
    fn test_same_name_different_ids_are_distinct() {
        let small = product(Some("p1"), "Popcorn", 4);
        let large = product(Some("p2"), "Popcorn", 6);
        let mut sel = ProductSelection::new();
        sel.set_amount(&small, 1);
        sel.set_amount(&large, 1);
        assert_eq!(sel.entries().count(), 2);
        assert_eq!(sel.subtotal(), Ok(Decimal::from(10)));
    }

    #[test]
    fn test_increment_and_decrement() {
        let soda = product(Some("s"), "Soda", 2);
        let mut sel = ProductSelection::new();
        sel.decrement(&soda);
        assert_eq!(sel.amount("s"), 0);
        sel.increment(&soda);
        sel.increment(&soda);
        assert_eq!(sel.amount("s"), 2);
        assert_eq!(sel.item_count(), 2);
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_exact_decimal_subtotal() {
        let nachos = Product {
            id: None,
            name: "Nachos".into(),
            price: Decimal::new(10, 2),
            image: None,
        };
        let mut sel = ProductSelection::new();
        sel.set_amount(&nachos, 3);
        assert_eq!(sel.subtotal(), Ok(Decimal::new(30, 2)));
    }

    #[test]
    fn test_huge_amounts_do_not_panic() {
        let popcorn = product(Some("p"), "Popcorn", 5);
        let soda = product(Some("s"), "Soda", 2);
        let mut sel = ProductSelection::new();
        sel.set_amount(&popcorn, u32::MAX);
        sel.set_amount(&soda, 1);
        assert_eq!(sel.item_count(), u64::from(u32::MAX) + 1);

        let gold = Product {
            id: Some("g".into()),
            name: "Gold popcorn".into(),
            price: Decimal::MAX,
            image: None,
        };
        sel.set_amount(&gold, 2);
        assert_eq!(sel.subtotal(), Err(BookingError::PriceOverflow));
        assert_eq!(sel.lines(), Err(BookingError::PriceOverflow));

        sel.set_amount(&gold, 0);
        assert!(sel.subtotal().is_ok());
    }
}
