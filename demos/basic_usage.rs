// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_matcher::prelude::*;

fn main() {
    // Matcher events are emitted at debug level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Matcher Example ===\n");

    let matchers = [
        ("default (11 digits)", DecimalNumberMatcher::default()),
        (
            "5 digits",
            DecimalNumberMatcher::new(DecimalMatcherConfig::new().with_max_total_digits(5)),
        ),
        (
            "5 digits, 2 places",
            DecimalNumberMatcher::new(DecimalMatcherConfig::from_params(&[5, 2]).unwrap()),
        ),
        (
            "monetary",
            DecimalNumberMatcher::new(DecimalMatcherConfig::monetary()),
        ),
    ];

    let inputs = [
        None,
        Some("12345678901"),
        Some("123456789012"),
        Some("123.45"),
        Some("12345.678"),
        Some("-0.5e-3"),
        Some("not-a-number"),
    ];

    for (label, matcher) in &matchers {
        println!("Matcher: {}", label);

        for input in inputs {
            let result = matcher.match_value(input);
            let shown = input.unwrap_or("<absent>");

            if result.is_valid() {
                println!("  {:>14}  ok", shown);
            } else {
                for error in result.errors() {
                    println!("  {:>14}  {} {}", shown, error.code, error.message);
                }
            }
        }
        println!();
    }

    // Positional parameters beyond the two supported ones are rejected
    match create_from_params(&[5, 2, 1]) {
        Ok(_) => println!("unexpected: three parameters accepted"),
        Err(e) => println!("Config error: {}", e),
    }
}
