// Stateless amount parsing, scaling and conversion helpers.
//
// Everything here is a pure function over its arguments: no cache, no
// clock, no I/O. Cross-currency conversion goes through the ratio of the
// two stored rates relative to the tenant default currency.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Currency, CurrencyRegistry, Money, Result};

pub struct CurrencyConverter;

impl CurrencyConverter {
    /// Parse a localized amount string into minor units for a currency.
    ///
    /// Fails with `InvalidAmount` if the string is not a valid number under
    /// the currency's separator rules.
    pub fn convert_to_cents(amount: &str, currency: &Currency) -> Result<i64> {
        let parsed = currency.number_format().parse_decimal(amount).ok_or_else(|| {
            AppError::invalid_amount(format!(
                "'{}' is not a valid {} amount",
                amount, currency.code
            ))
        })?;

        Self::decimal_to_cents(parsed, currency)
    }

    /// Scale a decimal amount to minor units, rounding half away from zero
    pub fn decimal_to_cents(amount: Decimal, currency: &Currency) -> Result<i64> {
        let scaled = (amount * Decimal::from(10i64.pow(currency.precision)))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        scaled.to_i64().ok_or_else(|| {
            AppError::invalid_amount(format!(
                "{} {} does not fit in minor units",
                amount, currency.code
            ))
        })
    }

    /// Expand minor units back into a decimal amount at the currency's
    /// precision. Exact, no rounding involved.
    pub fn cents_to_decimal(amount_minor: i64, currency: &Currency) -> Decimal {
        Decimal::new(amount_minor, currency.precision)
    }

    /// Convert a minor-unit balance between two currencies via their stored
    /// rates relative to the default currency.
    ///
    /// Identity law: when the currencies share a code the input is returned
    /// unchanged, exactly. Fails with `InvalidRate` if the source rate is
    /// zero (nothing meaningful can be derived from it).
    pub fn convert_balance(amount_minor: i64, from: &Currency, to: &Currency) -> Result<i64> {
        if from.code == to.code {
            return Ok(amount_minor);
        }

        if from.rate.is_zero() {
            return Err(AppError::invalid_rate(format!(
                "Currency {} has a zero stored rate",
                from.code
            )));
        }

        let amount = Self::cents_to_decimal(amount_minor, from);
        let converted = amount * to.rate / from.rate;

        Self::decimal_to_cents(converted, to)
    }

    /// Format minor units as a symbol-prefixed money string
    pub fn format_cents_to_money(
        amount_minor: i64,
        currency_code: Option<&str>,
        registry: &CurrencyRegistry,
    ) -> String {
        Money::new(amount_minor, currency_code, registry).format()
    }

    /// Format a decimal amount as a symbol-prefixed money string.
    /// Amounts beyond minor-unit range degrade to zero rather than failing
    /// a render pass.
    pub fn format_to_money(
        amount: Decimal,
        currency_code: Option<&str>,
        registry: &CurrencyRegistry,
    ) -> String {
        let currency = registry.resolve(currency_code);
        let code = currency.code.clone();
        let minor = Self::decimal_to_cents(amount, currency).unwrap_or_else(|err| {
            tracing::warn!("Falling back to zero while formatting {}: {}", amount, err);
            0
        });

        Money::new(minor, Some(code.as_str()), registry).format()
    }

    /// Form-validation helper: true when the string parses as an amount for
    /// the currency. Never errors, no side effects.
    pub fn is_valid_amount(amount: &str, currency: &Currency) -> bool {
        Self::convert_to_cents(amount, currency).is_ok()
    }
}
