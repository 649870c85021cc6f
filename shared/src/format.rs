use rust_decimal::Decimal;

/// Format an amount with thousands separators and at most three decimals,
/// followed by the currency label: `1,250.5 AFN`.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let number = group_thousands(amount);
    if currency.is_empty() {
        number
    } else {
        format!("{} {}", number, currency)
    }
}

/// `1234567.25` -> `1,234,567.25`
pub fn group_thousands(amount: Decimal) -> String {
    let rounded = amount.round_dp(3).normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(dec("0")), "0");
        assert_eq!(group_thousands(dec("300")), "300");
        assert_eq!(group_thousands(dec("1250")), "1,250");
        assert_eq!(group_thousands(dec("1234567.25")), "1,234,567.25");
        assert_eq!(group_thousands(dec("2.50")), "2.5");
        assert_eq!(group_thousands(dec("1.23456")), "1.235");
        assert_eq!(group_thousands(dec("-4500")), "-4,500");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec("1250"), "AFN"), "1,250 AFN");
        assert_eq!(format_amount(dec("99.9"), ""), "99.9");
    }
}
