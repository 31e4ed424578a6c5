//! Product price.

use block_markup::{Element, Node};

const CURRENCY_SYMBOL: &str = "$";

/// Format a price as dollars with two decimals, e.g. `$5.00`.
///
/// Rounds the exact binary value, so `2.675` (stored just below 2.675) shows
/// as `$2.67`. Values exactly halfway between two cents round away from zero.
/// Negative prices keep the sign after the symbol.
pub fn format_price(price: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, fixed_cents(price))
}

fn fixed_cents(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Drop the sign of negative zero.
    let value = if value == 0.0 { 0.0 } else { value };

    if is_cent_tie(value) {
        let cents = (value.abs() * 100.0).ceil() as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }
    format!("{:.2}", value)
}

/// Whether `value` lies exactly halfway between two cents.
///
/// A binary fraction can only end in a half cent when it is an odd multiple
/// of 1/8 (`.125`, `.375`, `.625`, `.875`).
fn is_cent_tie(value: f64) -> bool {
    let eighths = value * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 != 0.0
}

/// Render the price line.
pub fn view_price<M>(price: f64) -> Node<M> {
    Element::new("div")
        .class("b f2 mv4")
        .text(format_price(price))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(49.5), "$49.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(-0.0), "$0.00");
        assert_eq!(format_price(1234.567), "$1234.57");
        assert_eq!(format_price(19.999), "$20.00");
        assert_eq!(format_price(-3.1), "$-3.10");
    }

    #[test]
    fn test_format_price_rounds_stored_value() {
        assert_eq!(format_price(2.675), "$2.67");
        assert_eq!(format_price(0.015), "$0.01");
        assert_eq!(format_price(1.005), "$1.00");
    }

    #[test]
    fn test_format_price_exact_halves_round_up() {
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(2.375), "$2.38");
        assert_eq!(format_price(-0.125), "$-0.13");
        assert_eq!(format_price(0.25), "$0.25");
    }

    #[test]
    fn test_format_price_non_finite() {
        assert_eq!(format_price(f64::NAN), "$NaN");
        assert_eq!(format_price(f64::INFINITY), "$Infinity");
    }

    #[test]
    fn test_view_price() {
        let node: Node<()> = view_price(12.0);
        assert_eq!(node.to_html(), r#"<div class="b f2 mv4">$12.00</div>"#);
    }
}
