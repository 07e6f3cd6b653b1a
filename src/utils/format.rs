use chrono::NaiveDate;

/// Formats rupees with Indian digit grouping, e.g. `₹1,00,000` or `₹2,150.5`.
///
/// Amounts are rounded to two decimals and trailing zero decimals dropped.
pub fn format_inr(amount: f64) -> String {
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = paise / 100;
    let fraction = paise % 100;

    let mut out = String::from("₹");
    if amount < 0.0 && paise != 0 {
        out.push('-');
    }
    out.push_str(&group_indian(whole));

    if fraction != 0 {
        if fraction % 10 == 0 {
            out.push_str(&format!(".{}", fraction / 10));
        } else {
            out.push_str(&format!(".{fraction:02}"));
        }
    }

    out
}

/// Groups the last three digits, then pairs: 1234567 -> "12,34,567"
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Formats an ISO date (`2025-09-01`) as `1 Sep 2025`.
///
/// Anything that does not parse is returned unchanged.
pub fn format_quote_date(date: &str) -> String {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.format("%-d %b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// `27.4°C`, or a dash when the value is missing
pub fn format_celsius(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v}°C"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(950.0), "₹950");
        assert_eq!(format_inr(2150.0), "₹2,150");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
    }

    #[test]
    fn test_inr_fractions() {
        assert_eq!(format_inr(3350.25), "₹3,350.25");
        assert_eq!(format_inr(2280.5), "₹2,280.5");
        assert_eq!(format_inr(1650.004), "₹1,650");
        assert_eq!(format_inr(-1800.0), "₹-1,800");
    }

    #[test]
    fn test_quote_date() {
        assert_eq!(format_quote_date("2025-09-01"), "1 Sep 2025");
        assert_eq!(format_quote_date("2024-12-25"), "25 Dec 2024");
        assert_eq!(format_quote_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_celsius() {
        assert_eq!(format_celsius(Some(27.4)), "27.4°C");
        assert_eq!(format_celsius(Some(30.0)), "30°C");
        assert_eq!(format_celsius(None), "—");
    }
}
