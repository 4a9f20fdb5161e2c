use std::collections::BTreeSet;

use crate::domain::rules::numeric::{parse_leading_int, parse_price};

pub const CURRENCY_SYMBOL: &str = "¢";

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rounds the shortest decimal form of `value.abs()` to `decimals` places,
/// ties away from zero. Returns the integer and fraction digits.
fn round_half_away(value: f64, decimals: usize) -> (String, String) {
    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), ""),
    };
    let mut digits: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().chain(std::iter::repeat('0')).take(decimals))
        .collect();

    if frac_part.chars().nth(decimals).is_some_and(|next| next >= '5') {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, '1');
                break;
            }
            idx -= 1;
            if digits[idx] == '9' {
                digits[idx] = '0';
            } else {
                digits[idx] = char::from(digits[idx] as u8 + 1);
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    (
        digits[..split].iter().collect(),
        digits[split..].iter().collect(),
    )
}

/// en-US style: comma thousands separators and a fixed number of decimals.
pub fn format_number_with_commas(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let (int_part, frac_part) = round_half_away(value, decimals);
    let negative =
        value < 0.0 && int_part.chars().chain(frac_part.chars()).any(|c| c != '0');

    let mut text = String::new();
    if negative {
        text.push('-');
    }
    text.push_str(&group_thousands(&int_part));
    if !frac_part.is_empty() {
        text.push('.');
        text.push_str(&frac_part);
    }
    text
}

pub fn format_currency(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_number_with_commas(value, 2))
}

/// Grouped quantity with at most three fraction digits, trailing zeros dropped.
pub fn format_quantity(value: f64) -> String {
    let mut text = format_number_with_commas(value, 3);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

/// Price cell as shown in listings, without the currency symbol.
pub fn format_price(raw: &str) -> String {
    if raw.is_empty() {
        return "0.00".to_string();
    }
    format_number_with_commas(parse_price(raw), 2)
}

pub fn display_stock(raw: &str) -> &str {
    if raw.is_empty() {
        "0"
    } else {
        raw
    }
}

pub fn has_stock(raw: &str) -> bool {
    parse_leading_int(raw) > 0
}

pub fn stock_status(raw: &str) -> &'static str {
    if has_stock(raw) {
        "En stock"
    } else {
        "Agotado"
    }
}

pub fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

pub fn warehouse_selection_summary(selected: &BTreeSet<String>, option_count: usize) -> String {
    match selected.len() {
        0 => "Todas las bodegas".to_string(),
        n if n == option_count => "Todas las bodegas".to_string(),
        1 => "1 seleccionada".to_string(),
        n => format!("{n} seleccionadas"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_with_commas_handles_decimals() {
        assert_eq!(format_number_with_commas(12345.678, 0), "12,346");
        assert_eq!(format_number_with_commas(12345.678, 2), "12,345.68");
        assert_eq!(format_number_with_commas(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number_with_commas(999.0, 2), "999.00");
        assert_eq!(format_number_with_commas(1_000_000.0, 0), "1,000,000");
    }

    #[test]
    fn format_number_with_commas_rounds_ties_away_from_zero() {
        assert_eq!(format_number_with_commas(0.125, 2), "0.13");
        assert_eq!(format_number_with_commas(2.5, 0), "3");
        assert_eq!(format_number_with_commas(-2.5, 0), "-3");
        assert_eq!(format_number_with_commas(1.005, 2), "1.01");
        assert_eq!(format_number_with_commas(999.995, 2), "1,000.00");
        assert_eq!(format_number_with_commas(-0.004, 2), "0.00");
    }

    #[test]
    fn format_quantity_trims_fraction() {
        assert_eq!(format_quantity(1234.0), "1,234");
        assert_eq!(format_quantity(12.5), "12.5");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn price_and_stock_cells_have_fallbacks() {
        assert_eq!(format_price(""), "0.00");
        assert_eq!(format_price("¢15,990.5"), "15,990.50");
        assert_eq!(format_currency(4723.793), "¢4,723.79");
        assert_eq!(display_stock(""), "0");
        assert_eq!(display_stock("12"), "12");
        assert!(has_stock("3.0"));
        assert!(!has_stock("0.9"));
        assert_eq!(stock_status("12"), "En stock");
        assert_eq!(stock_status(""), "Agotado");
        assert_eq!(stock_status("0.5"), "Agotado");
        assert_eq!(display_or_dash(""), "-");
    }

    #[test]
    fn selection_summary_counts_partial_selection() {
        let mut selected = BTreeSet::new();
        assert_eq!(warehouse_selection_summary(&selected, 3), "Todas las bodegas");
        selected.insert("B01 - Central".to_string());
        assert_eq!(warehouse_selection_summary(&selected, 3), "1 seleccionada");
        selected.insert("B02".to_string());
        assert_eq!(warehouse_selection_summary(&selected, 3), "2 seleccionadas");
        selected.insert("B03".to_string());
        assert_eq!(warehouse_selection_summary(&selected, 3), "Todas las bodegas");
    }
}
