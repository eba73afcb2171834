// Money - integer minor-unit representation
//
// Balances are stored as i64 cents, never floating point. User input arrives
// as whole currency units ("42" means $42.00) and is widened on parse.

/// Minor units (cents). Negative values never occur in stored balances but
/// the type stays signed so arithmetic mistakes fail tests loudly instead
/// of wrapping.
pub type MinorUnits = i64;

/// Minor units per whole currency unit.
pub const MINOR_PER_UNIT: i64 = 100;

/// Widen a whole-unit amount to minor units. `None` on overflow.
pub fn from_whole_units(units: i64) -> Option<MinorUnits> {
    units.checked_mul(MINOR_PER_UNIT)
}

/// Format minor units as currency: `$1,234.56`.
///
/// Leading `$`, thousands separators, always two decimals.
pub fn format_currency(minor: MinorUnits) -> String {
    let abs = minor.unsigned_abs();
    let units = (abs / MINOR_PER_UNIT as u64).to_string();
    let cents = abs % MINOR_PER_UNIT as u64;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if minor < 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "$0.00")]
    #[case(5, "$0.05")]
    #[case(6000, "$60.00")]
    #[case(99_999, "$999.99")]
    #[case(100_000, "$1,000.00")]
    #[case(123_456_700, "$1,234,567.00")]
    #[case(-2_550, "-$25.50")]
    fn test_format_currency(#[case] minor: MinorUnits, #[case] expected: &str) {
        assert_eq!(format_currency(minor), expected);
    }

    #[test]
    fn test_from_whole_units() {
        assert_eq!(from_whole_units(0), Some(0));
        assert_eq!(from_whole_units(42), Some(4200));
        assert_eq!(from_whole_units(i64::MAX), None);
    }
}
