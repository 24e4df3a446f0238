// Adjustment application: percentage vs fixed, active vs inactive.

use proptest::prelude::*;
use rust_decimal_macros::dec;

use ledgercalc::adjustments::{
    Adjustment, AdjustmentCategory, AdjustmentEngine, AdjustmentLookup, AdjustmentRate,
    InMemoryAdjustments,
};

proptest! {
    #[test]
    fn fixed_adjustments_ignore_the_base(
        amount in -1_000_000i64..1_000_000,
        base in -1_000_000_000i64..1_000_000_000
    ) {
        let adjustment = Adjustment::fixed("flat", AdjustmentCategory::Discount, amount);
        prop_assert_eq!(AdjustmentEngine::apply(&adjustment, base), amount);
    }

    #[test]
    fn percentage_adjustments_scale_with_the_base(base in 0i64..1_000_000_000) {
        let vat = Adjustment::percentage("VAT 10%", AdjustmentCategory::Tax, dec!(0.10)).unwrap();
        let ten_percent = AdjustmentEngine::apply(&vat, base);

        // within one minor unit of base / 10, from final-division rounding
        prop_assert!((ten_percent * 10 - base).abs() <= 5);
    }
}

#[test]
fn percentage_examples() {
    let vat = Adjustment::percentage("VAT 2.5%", AdjustmentCategory::Tax, dec!(0.025)).unwrap();
    assert_eq!(AdjustmentEngine::apply(&vat, 100_000), 2_500);

    let discount =
        Adjustment::percentage("Loyalty 10%", AdjustmentCategory::Discount, dec!(0.10)).unwrap();
    assert_eq!(AdjustmentEngine::apply(&discount, 100_000), 10_000);
}

#[test]
fn inactive_adjustments_keep_their_arithmetic() {
    // Historical documents must reproduce their totals after an adjustment
    // is retired; only the caller decides whether to warn about it.
    let retired = Adjustment::percentage("Old VAT 19%", AdjustmentCategory::Tax, dec!(0.19))
        .unwrap()
        .deactivated();

    assert!(!retired.is_active());
    assert_eq!(AdjustmentEngine::apply(&retired, 10_000), 1_900);
}

#[test]
fn negative_ratio_is_a_contract_violation() {
    assert!(Adjustment::percentage("bad", AdjustmentCategory::Tax, dec!(-0.05)).is_err());
}

#[test]
fn lookup_resolves_by_id() {
    let vat = Adjustment::percentage("VAT 21%", AdjustmentCategory::Tax, dec!(0.21)).unwrap();
    let vat_id = vat.id.clone();
    assert_eq!(vat.rate, AdjustmentRate::Percentage(210_000));

    let lookup = InMemoryAdjustments::new(vec![vat]);
    let resolved = lookup.find(&vat_id).unwrap();
    assert_eq!(AdjustmentEngine::apply(&resolved, 10_000), 2_100);

    assert!(lookup.find("not-an-id").is_none());
}
