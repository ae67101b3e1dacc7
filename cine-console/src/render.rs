//! Plain-text rendering for list pages and quotes

use std::fmt::Write as _;
use std::str::FromStr;

use cine_client::booking::BookingSummary;
use cine_client::{PageToken, PageView};
use rust_decimal::Decimal;

/// `--product name=amount`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductArg {
    pub name: String,
    pub amount: u32,
}

impl FromStr for ProductArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, amount) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("expected name=amount, got {s:?}"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing product name in {s:?}"));
        }
        let amount = amount
            .trim()
            .parse()
            .map_err(|_| format!("invalid amount in {s:?}"))?;
        Ok(Self {
            name: name.to_string(),
            amount,
        })
    }
}

/// `« 4 5 [6] 7 8 »`-style page bar
pub fn page_bar(tokens: &[PageToken], current: usize) -> String {
    tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(n) if *n == current => format!("[{n}]"),
            PageToken::Page(n) => n.to_string(),
            PageToken::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print a rendered page, one line per record
pub fn print_page<T>(title: &str, view: &PageView<'_, T>, line: impl Fn(&T) -> String) {
    println!("{title} ({} found)", view.total_items);
    if view.is_empty() {
        println!("  no results");
        return;
    }
    if view.items.is_empty() {
        println!("  page {} is past the end", view.page);
    }
    for item in &view.items {
        println!("  {}", line(item));
    }
    if view.total_pages > 1 {
        println!("  pages: {}", page_bar(&view.tokens, view.page));
    }
}

pub fn money(amount: Decimal, currency: &str) -> String {
    format!("{} {currency}", amount.round_dp(2))
}

pub fn quote(summary: &BookingSummary, currency: &str) -> String {
    let mut out = String::new();
    let title = summary.movie_title.as_deref().unwrap_or(&summary.showtime_id);
    let _ = writeln!(out, "Booking for {title}");
    let seats: Vec<String> = summary.seats.iter().map(ToString::to_string).collect();
    let _ = writeln!(
        out,
        "  {} x ticket @ {}  ({})  = {}",
        summary.seats.len(),
        money(summary.ticket_price, currency),
        seats.join(", "),
        money(summary.price.tickets, currency)
    );
    for line in &summary.products {
        let _ = writeln!(
            out,
            "  {} x {} @ {}  = {}",
            line.amount,
            line.name,
            money(line.unit_price, currency),
            money(line.subtotal, currency)
        );
    }
    let _ = write!(out, "  total: {}", money(summary.price.total, currency));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_arg() {
        let arg: ProductArg = "Popcorn=3".parse().unwrap();
        assert_eq!(arg.name, "Popcorn");
        assert_eq!(arg.amount, 3);

        let arg: ProductArg = "Hot dog = 1".parse().unwrap();
        assert_eq!(arg.name, "Hot dog");

        assert!("Popcorn".parse::<ProductArg>().is_err());
        assert!("=2".parse::<ProductArg>().is_err());
        assert!("Soda=-1".parse::<ProductArg>().is_err());
    }

    #[test]
    fn test_page_bar() {
        let tokens = cine_client::listing::page_window(6, 12, 5);
        assert_eq!(page_bar(&tokens, 6), "… 4 5 [6] 7 8 …");
        assert_eq!(page_bar(&[], 1), "");
    }

    #[test]
    fn test_money_rounds_to_cents() {
        assert_eq!(money(Decimal::new(8, 0), "EUR"), "8 EUR");
        assert_eq!(money(Decimal::new(12345, 3), "EUR"), "12.34 EUR");
    }
}
