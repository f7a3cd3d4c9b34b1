// ============================================================================
// Matcher Property Tests
// ============================================================================

use decimal_matcher::prelude::*;
use proptest::prelude::*;

const NOT_DECIMAL: &str = "doubleNumber.e001";
const TOO_MANY_DIGITS: &str = "doubleNumber.e002";
const TOO_MANY_PLACES: &str = "doubleNumber.e003";

/// Digit counts computed straight from the text: (total digits, decimal places)
fn expected_counts(input: &str) -> (u64, u64) {
    let unsigned = input.trim_start_matches(['+', '-']);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let int_part = int_part.trim_start_matches('0');
    let frac_part = frac_part.trim_end_matches('0');

    let places = frac_part.len() as u64;
    let total = if !int_part.is_empty() {
        (int_part.len() + frac_part.len()) as u64
    } else if !frac_part.is_empty() {
        frac_part.trim_start_matches('0').len() as u64
    } else {
        1
    };
    (total, places)
}

fn decimal_string() -> impl Strategy<Value = String> {
    "[+-]?[0-9]{1,20}(\\.[0-9]{0,12})?"
}

proptest! {
    #[test]
    fn parsed_counts_match_text(input in decimal_string()) {
        let value: DecimalValue = input.parse().unwrap();
        let (total, places) = expected_counts(&input);
        prop_assert_eq!(value.total_digits(), total);
        prop_assert_eq!(value.fractional_digits(), places);
    }

    #[test]
    fn total_digit_limit_only(input in decimal_string(), limit in 1u32..25) {
        let matcher = DecimalNumberMatcher::new(
            DecimalMatcherConfig::new().with_max_total_digits(limit),
        );
        let result = matcher.match_value(Some(&input));
        let (total, _) = expected_counts(&input);

        if total > u64::from(limit) {
            prop_assert_eq!(result.codes().collect::<Vec<_>>(), vec![TOO_MANY_DIGITS]);
        } else {
            prop_assert!(result.is_empty());
        }
    }

    #[test]
    fn both_limits(input in decimal_string(), limit in 1u32..25, places_limit in 0u32..8) {
        let matcher = DecimalNumberMatcher::new(
            DecimalMatcherConfig::new()
                .with_max_total_digits(limit)
                .with_max_decimal_places(places_limit),
        );
        let result = matcher.match_value(Some(&input));
        let (total, places) = expected_counts(&input);

        let mut expected = Vec::new();
        if total > u64::from(limit) {
            expected.push(TOO_MANY_DIGITS);
        }
        if places > u64::from(places_limit) {
            expected.push(TOO_MANY_PLACES);
        }
        prop_assert_eq!(result.codes().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn non_numeric_input_reports_only_parse_error(
        prefix in "[0-9.]{0,5}",
        junk in "[a-dA-Df-zF-Z ,_]",
        suffix in "[0-9.]{0,5}",
        limit in 1u32..5,
    ) {
        let input = format!("{prefix}{junk}{suffix}");
        let matcher = DecimalNumberMatcher::new(DecimalMatcherConfig::from_params(&[limit, 0]).unwrap());
        let result = matcher.match_value(Some(&input));
        prop_assert_eq!(result.codes().collect::<Vec<_>>(), vec![NOT_DECIMAL]);
    }

    #[test]
    fn absent_value_is_valid(total in proptest::option::of(0u32..30), places in proptest::option::of(0u32..10)) {
        let matcher = DecimalNumberMatcher::new(DecimalMatcherConfig {
            max_total_digits: total,
            max_decimal_places: places,
        });
        prop_assert!(matcher.match_value(None).is_empty());
    }
}
