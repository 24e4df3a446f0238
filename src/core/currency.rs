// Currency metadata and localized number formatting.
//
// The engine never owns a currency table of its own: callers inject a
// CurrencyRegistry built from whatever the surrounding application persists.
// Separator and symbol rules live here so every formatted amount in the
// system goes through one code path.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Locale-specific separators for rendering and parsing decimal numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub decimal_mark: char,
    pub thousands_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_mark: '.',
            thousands_separator: ',',
        }
    }
}

impl NumberFormat {
    /// Render a decimal value with this locale's separators.
    ///
    /// `places` fixes the number of decimal digits (rounding half away from
    /// zero); `None` trims trailing zeros instead. The integer part is
    /// grouped in threes.
    pub fn format(&self, value: Decimal, places: Option<u32>) -> String {
        let mut body = match places {
            Some(p) => {
                let rounded =
                    value.round_dp_with_strategy(p, RoundingStrategy::MidpointAwayFromZero);
                format!("{:.*}", p as usize, rounded)
            }
            None => value.normalize().to_string(),
        };

        let negative = body.starts_with('-');
        if negative {
            body.remove(0);
        }

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i.to_string(), Some(f.to_string())),
            None => (body, None),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(&int_part, self.thousands_separator));
        if let Some(frac) = frac_part {
            out.push(self.decimal_mark);
            out.push_str(&frac);
        }
        out
    }

    /// Parse a localized decimal string. Returns `None` for anything that is
    /// not a valid number under this locale's separators.
    pub fn parse_decimal(&self, input: &str) -> Option<Decimal> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut cleaned = String::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            if c == self.thousands_separator {
                continue;
            }
            if c == self.decimal_mark {
                cleaned.push('.');
            } else {
                cleaned.push(c);
            }
        }

        cleaned.parse::<Decimal>().ok()
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Currency metadata as captured from the tenant's currency table
///
/// `rate` is the number of units of this currency per one unit of the tenant
/// default currency, recorded when the owning record was saved. Historical
/// conversions replay against this snapshot, not a live rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO-4217-like code, unique key
    pub code: String,

    /// Decimal places for minor-unit scaling (typically 2)
    pub precision: u32,

    /// Display symbol
    pub symbol: String,

    /// Whether the symbol renders before the amount
    pub symbol_first: bool,

    /// Decimal separator for this currency's locale
    pub decimal_mark: char,

    /// Thousands separator for this currency's locale
    pub thousands_separator: char,

    /// Whether the currency is selectable for new documents
    pub enabled: bool,

    /// Units of this currency per one unit of the default currency
    pub rate: Decimal,
}

impl Currency {
    pub fn new(code: &str, precision: u32, symbol: &str, rate: Decimal) -> Self {
        Self {
            code: code.to_string(),
            precision,
            symbol: symbol.to_string(),
            symbol_first: true,
            decimal_mark: '.',
            thousands_separator: ',',
            enabled: true,
            rate,
        }
    }

    pub fn with_separators(mut self, decimal_mark: char, thousands_separator: char) -> Self {
        self.decimal_mark = decimal_mark;
        self.thousands_separator = thousands_separator;
        self
    }

    pub fn symbol_last(mut self) -> Self {
        self.symbol_first = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            decimal_mark: self.decimal_mark,
            thousands_separator: self.thousands_separator,
        }
    }
}

/// Injected currency lookup
///
/// Replaces a per-process currency cache with an explicit dependency so the
/// engine can run against a fixed table in tests and stays free of hidden
/// shared state.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    currencies: HashMap<String, Currency>,
    default_code: String,
}

impl CurrencyRegistry {
    /// Build a registry from the tenant's currency table.
    ///
    /// The default currency must be present and its rate must be exactly 1:
    /// all stored rates are expressed relative to it.
    pub fn new(currencies: Vec<Currency>, default_code: &str) -> Result<Self> {
        let map: HashMap<String, Currency> = currencies
            .into_iter()
            .map(|c| (c.code.clone(), c))
            .collect();

        let default = map.get(default_code).ok_or_else(|| {
            AppError::validation(format!(
                "Default currency {} is not in the currency table",
                default_code
            ))
        })?;

        if default.rate != Decimal::ONE {
            return Err(AppError::validation(format!(
                "Default currency {} must have rate 1, got {}",
                default_code, default.rate
            )));
        }

        Ok(Self {
            currencies: map,
            default_code: default_code.to_string(),
        })
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(code)
    }

    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    pub fn default_currency(&self) -> &Currency {
        // Presence is checked at construction time
        &self.currencies[&self.default_code]
    }

    /// Resolve a currency code, falling back to the tenant default for a
    /// missing or unknown code.
    pub fn resolve(&self, code: Option<&str>) -> &Currency {
        match code {
            Some(c) => self.get(c).unwrap_or_else(|| self.default_currency()),
            None => self.default_currency(),
        }
    }

    pub fn enabled_currencies(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.values().filter(|c| c.enabled)
    }
}
