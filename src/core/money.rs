// Money value type.
//
// An immutable (minor-unit amount, currency) pair. The raw amount is
// denominated in the tenant default currency until convert() is called;
// conversion uses the rate snapshot captured inside the Currency metadata,
// never a live lookup, so a saved document renders the same numbers forever.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{Currency, CurrencyRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// Minor units (cents for a precision-2 currency)
    amount: i64,

    /// Currency metadata snapshot, including the stored exchange rate
    currency: Currency,

    /// Precision of the tenant default currency, captured at construction
    default_precision: u32,

    /// Set once convert() runs; exactly one of raw/converted is observable
    converted: Option<i64>,
}

impl Money {
    /// Build a Money value from minor units.
    ///
    /// An omitted or unknown currency code resolves to the tenant default
    /// currency from the injected registry.
    pub fn new(amount: i64, currency_code: Option<&str>, registry: &CurrencyRegistry) -> Self {
        let currency = registry.resolve(currency_code).clone();
        Self {
            amount,
            currency,
            default_precision: registry.default_currency().precision,
            converted: None,
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Convert the raw default-currency amount into this Money's own
    /// currency using the stored rate snapshot.
    pub fn convert(mut self) -> Self {
        let as_decimal = Decimal::new(self.amount, self.default_precision);
        let converted = as_decimal * self.currency.rate;

        let minor = (converted * Decimal::from(10i64.pow(self.currency.precision)))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(self.amount);

        self.converted = Some(minor);
        self
    }

    /// The converted amount if convert() was called, else the raw amount
    pub fn effective_amount(&self) -> i64 {
        self.converted.unwrap_or(self.amount)
    }

    fn effective_decimal(&self) -> Decimal {
        Decimal::new(self.effective_amount(), self.currency.precision)
    }

    /// Render with the currency symbol, e.g. "$1,000.00" or "1.000,00 €"
    pub fn format(&self) -> String {
        let value = self.effective_decimal();
        let body = self
            .currency
            .number_format()
            .format(value.abs(), Some(self.currency.precision));

        let sign = if value.is_sign_negative() && !value.is_zero() {
            "-"
        } else {
            ""
        };

        if self.currency.symbol_first {
            format!("{}{}{}", sign, self.currency.symbol, body)
        } else {
            format!("{}{} {}", sign, body, self.currency.symbol)
        }
    }

    /// Render without a symbol, e.g. "1,000.00"
    pub fn format_simple(&self) -> String {
        self.currency
            .number_format()
            .format(self.effective_decimal(), Some(self.currency.precision))
    }

    /// Render with the currency code appended, e.g. "1,000.00 USD"
    pub fn format_with_code(&self) -> String {
        format!("{} {}", self.format_simple(), self.currency.code)
    }
}
