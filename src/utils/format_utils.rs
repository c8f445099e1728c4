const ARROW_UP: &str = "▲";
const ARROW_DOWN: &str = "▼";

/// `$12.34567`. The ticker always shows five places, meme coins included.
pub fn format_price(price: f64) -> String {
    format!("${:.5}", price)
}

/// `▲ 4.20%` / `▼ 1.05%`. Zero counts as down.
pub fn format_change(change: f64) -> String {
    let arrow = if change > 0.0 { ARROW_UP } else { ARROW_DOWN };
    format!("{} {:.2}%", arrow, change.abs())
}

/// `$1,234,567` with no decimals.
pub fn format_money(value: f64) -> String {
    format!("${}", with_thousands(value.round() as i64))
}

pub fn with_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_has_five_places() {
        assert_eq!(format_price(0.00001), "$0.00001");
        assert_eq!(format_price(12.3), "$12.30000");
    }

    #[test]
    fn change_uses_arrow_and_magnitude() {
        assert_eq!(format_change(4.2), "▲ 4.20%");
        assert_eq!(format_change(-1.049), "▼ 1.05%");
        assert_eq!(format_change(0.0), "▼ 0.00%");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(-1_234_567), "-1,234,567");
        assert_eq!(format_money(10_000_000.49), "$10,000,000");
    }
}
