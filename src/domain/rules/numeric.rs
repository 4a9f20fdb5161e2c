use std::sync::LazyLock;

use regex::Regex;

static LEADING_FLOAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap());
static LEADING_INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+").unwrap());

/// Parses the longest numeric prefix after leading whitespace
/// (`"12.5 u"` is 12.5). Anything unparsable or non-finite yields 0.
pub fn parse_leading_float(text: &str) -> f64 {
    LEADING_FLOAT_RE
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn parse_leading_int(text: &str) -> i64 {
    LEADING_INT_RE
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Price cells carry currency symbols and thousands separators; only digits and
/// dots survive before parsing, so a leading minus sign is dropped too.
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    parse_leading_float(&cleaned)
}
