// Property-based tests for scaled-rate arithmetic.
//
// The representation must round-trip losslessly within its supported
// precision and never drift under the final-division rounding rule.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ledgercalc::core::rate::{
    calculate_percentage, decimal_to_scaled_rate, format_scaled_rate, parse_localized_rate,
    scaled_rate_to_decimal, RATE_SCALE,
};
use ledgercalc::core::NumberFormat;

proptest! {
    #[test]
    fn round_trip_is_lossless_within_supported_precision(
        // any ratio with at most six fractional digits, up to 200%
        raw in 0i64..=2 * RATE_SCALE
    ) {
        let ratio = Decimal::new(raw, 6);
        let scaled = decimal_to_scaled_rate(ratio).unwrap();

        prop_assert_eq!(scaled, raw);
        prop_assert_eq!(scaled_rate_to_decimal(scaled), ratio);
    }

    #[test]
    fn zero_rate_yields_zero_for_any_base(base in i64::MIN / 2..i64::MAX / 2) {
        prop_assert_eq!(calculate_percentage(base, 0), 0);
    }

    #[test]
    fn percentage_is_deterministic(
        base in 0i64..1_000_000_000,
        scaled in 0i64..=RATE_SCALE
    ) {
        prop_assert_eq!(
            calculate_percentage(base, scaled),
            calculate_percentage(base, scaled)
        );
    }

    #[test]
    fn percentage_sign_follows_base(
        base in 1i64..1_000_000_000,
        scaled in 1i64..=RATE_SCALE
    ) {
        let positive = calculate_percentage(base, scaled);
        let negative = calculate_percentage(-base, scaled);

        prop_assert!(positive >= 0);
        prop_assert_eq!(negative, -positive);
    }

    #[test]
    fn full_rate_is_identity(base in -1_000_000_000i64..1_000_000_000) {
        prop_assert_eq!(calculate_percentage(base, RATE_SCALE), base);
    }

    #[test]
    fn percentage_never_exceeds_base_for_sub_unit_rates(
        base in 0i64..1_000_000_000,
        scaled in 0i64..=RATE_SCALE
    ) {
        prop_assert!(calculate_percentage(base, scaled) <= base);
    }
}

#[test]
fn specific_percentage_calculations() {
    // 2.5% of $1000.00 = $25.00
    let scaled = decimal_to_scaled_rate(dec!(0.025)).unwrap();
    assert_eq!(calculate_percentage(100_000, scaled), 2_500);

    // 21% of EUR 123.45 = 25.9245 -> 25.92
    let scaled = decimal_to_scaled_rate(dec!(0.21)).unwrap();
    assert_eq!(calculate_percentage(12_345, scaled), 2_592);

    // half-away rounding on the final division: 15% of 10 cents = 1.5 -> 2
    let scaled = decimal_to_scaled_rate(dec!(0.15)).unwrap();
    assert_eq!(calculate_percentage(10, scaled), 2);
    assert_eq!(calculate_percentage(-10, scaled), -2);
}

#[test]
fn formatting_preserves_sign_and_grouping() {
    let format = NumberFormat::default();
    assert_eq!(format_scaled_rate(10_000_000, &format), "1,000");
    assert_eq!(format_scaled_rate(-250_000, &format), "-25");
    assert_eq!(format_scaled_rate(112_500, &format), "11.25");
}

#[test]
fn parse_rejects_garbage_and_round_trips_formatting() {
    let format = NumberFormat::default();

    assert!(parse_localized_rate("21%", &format).is_err());
    assert!(parse_localized_rate("", &format).is_err());

    for scaled in [25_000i64, 112_500, 1_000_000, 10_000_000] {
        let rendered = format_scaled_rate(scaled, &format);
        let ratio = parse_localized_rate(&rendered, &format).unwrap();
        assert_eq!(decimal_to_scaled_rate(ratio).unwrap(), scaled);
    }
}
