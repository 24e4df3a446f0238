// Document totals aggregation.
//
// Best-effort by design: this backs live form previews, so a malformed
// field degrades to zero for that field and the rest of the document still
// computes. Arithmetic stays in minor units; rounding happens once per
// line and once per adjustment application.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::core::{rate, Currency, CurrencyRegistry, Money, NumberFormat};
use crate::modules::adjustments::repositories::AdjustmentLookup;
use crate::modules::adjustments::services::AdjustmentEngine;
use crate::modules::conversion::CurrencyConverter;
use crate::modules::documents::models::{
    DiscountComputation, DiscountMethod, DocumentInput, DocumentTotals, LineItemInput,
};

/// Aggregates line items and adjustments into document totals
pub struct DocumentTotalsCalculator<'a> {
    currencies: &'a CurrencyRegistry,
    adjustments: &'a dyn AdjustmentLookup,
}

impl<'a> DocumentTotalsCalculator<'a> {
    pub fn new(currencies: &'a CurrencyRegistry, adjustments: &'a dyn AdjustmentLookup) -> Self {
        Self {
            currencies,
            adjustments,
        }
    }

    /// Compute subtotal, tax, discount, grand total and amount due for a
    /// document. Pure over its input: no side effects, identical input
    /// yields identical output.
    pub fn compute(&self, input: &DocumentInput) -> DocumentTotals {
        let currency = self.currencies.resolve(input.currency_code.as_deref());
        let format = currency.number_format();

        let mut subtotal: i64 = 0;
        let mut tax_total: i64 = 0;
        let mut discount_total: i64 = 0;

        for line in &input.line_items {
            let line_minor = self.line_subtotal(line, currency, &format);
            subtotal += line_minor;

            tax_total += self.apply_adjustments(&line.tax_ids, line_minor);

            if input.discount_method == DiscountMethod::PerLineItem {
                discount_total += self.apply_adjustments(&line.discount_ids, line_minor);
            }
        }

        if input.discount_method == DiscountMethod::PerDocument {
            discount_total += self.document_discount(input, subtotal, currency, &format);
        }

        // Negative grand totals are credits; never clamp
        let grand_total = subtotal + tax_total - discount_total;

        let amount_paid = self.parse_amount_or_zero(&input.amount_paid, currency);
        let amount_due = grand_total - amount_paid;

        let conversion_note = self.conversion_note(currency, grand_total);

        let code = Some(currency.code.as_str());
        DocumentTotals {
            subtotal: Money::new(subtotal, code, self.currencies),
            tax_total: Money::new(tax_total, code, self.currencies),
            discount_total: Money::new(discount_total, code, self.currencies),
            grand_total: Money::new(grand_total, code, self.currencies),
            amount_due: Money::new(amount_due, code, self.currencies),
            per_document_discount: input.discount_method == DiscountMethod::PerDocument,
            conversion_note,
        }
    }

    /// quantity x unit price in minor units; malformed fields count as zero
    fn line_subtotal(
        &self,
        line: &LineItemInput,
        currency: &Currency,
        format: &NumberFormat,
    ) -> i64 {
        let quantity = self.parse_field_or_zero(&line.quantity, format, "quantity");
        let unit_price = self.parse_field_or_zero(&line.unit_price, format, "unit price");

        match CurrencyConverter::decimal_to_cents(quantity * unit_price, currency) {
            Ok(minor) => minor,
            Err(err) => {
                warn!("Line subtotal out of range, counting as zero: {}", err);
                0
            }
        }
    }

    fn apply_adjustments(&self, ids: &[String], base_minor: i64) -> i64 {
        let mut total = 0;
        for id in ids {
            match self.adjustments.find(id) {
                Some(adjustment) => total += AdjustmentEngine::apply(&adjustment, base_minor),
                None => warn!("Unknown adjustment {}, counting as zero", id),
            }
        }
        total
    }

    /// Document-level discount against the full subtotal. A blank or
    /// invalid rate is zero, never an error.
    fn document_discount(
        &self,
        input: &DocumentInput,
        subtotal: i64,
        currency: &Currency,
        format: &NumberFormat,
    ) -> i64 {
        let Some(discount) = &input.document_discount else {
            return 0;
        };

        match discount.computation {
            DiscountComputation::Percentage => rate::parse_localized_rate(&discount.rate, format)
                .and_then(rate::decimal_to_scaled_rate)
                .map(|scaled| rate::calculate_percentage(subtotal, scaled))
                .unwrap_or_else(|err| {
                    if !discount.rate.trim().is_empty() {
                        warn!("Document discount rate ignored: {}", err);
                    }
                    0
                }),
            DiscountComputation::Fixed => self.parse_amount_or_zero(&discount.rate, currency),
        }
    }

    fn parse_field_or_zero(&self, value: &str, format: &NumberFormat, field: &str) -> Decimal {
        if value.trim().is_empty() {
            return Decimal::ZERO;
        }

        format.parse_decimal(value).unwrap_or_else(|| {
            warn!("Malformed {} '{}', counting as zero", field, value);
            Decimal::ZERO
        })
    }

    fn parse_amount_or_zero(&self, value: &str, currency: &Currency) -> i64 {
        if value.trim().is_empty() {
            return 0;
        }

        CurrencyConverter::convert_to_cents(value, currency).unwrap_or_else(|err| {
            warn!("Malformed amount '{}', counting as zero: {}", value, err);
            0
        })
    }

    /// Disclosure of the rate used to restate the grand total in the tenant
    /// default currency. Uses the document currency's stored snapshot rate,
    /// so the note stays stable after the live rate moves.
    fn conversion_note(&self, currency: &Currency, grand_total_minor: i64) -> Option<String> {
        let default = self.currencies.default_currency();
        if currency.code == default.code {
            return None;
        }

        if currency.rate.is_zero() {
            warn!(
                "Currency {} has a zero stored rate, skipping conversion disclosure",
                currency.code
            );
            return None;
        }

        let restated = match CurrencyConverter::convert_balance(grand_total_minor, currency, default)
        {
            Ok(minor) => minor,
            Err(err) => {
                warn!("Skipping conversion disclosure: {}", err);
                return None;
            }
        };

        // Indirect rate at high precision for auditability
        let indirect = (Decimal::ONE / currency.rate)
            .round_dp_with_strategy(10, RoundingStrategy::MidpointAwayFromZero);

        let grand = Money::new(grand_total_minor, Some(currency.code.as_str()), self.currencies);
        let restated = Money::new(restated, Some(default.code.as_str()), self.currencies);

        Some(format!(
            "{} is equivalent to {} at an exchange rate of 1 {} = {} {}",
            grand.format_with_code(),
            restated.format_with_code(),
            currency.code,
            indirect,
            default.code
        ))
    }
}
