// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Date and currency formatting for display.

use std::fmt;
use std::str::FromStr;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::{Error, Result};
use crate::utils::numbers::{group_thousands, to_fixed};

/// Long human form, e.g. `January 15, 2024`.
pub fn format_date(date: Date) -> String {
    let format = format_description!("[month repr:long] [day padding:none], [year]");
    // Formatting a `Date` with date-only components cannot fail.
    date.format(format).unwrap_or_else(|_| date.to_string())
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date.
///
/// Timestamps keep the calendar date of their own offset.
pub fn parse_date(text: &str) -> Result<Date> {
    let trimmed = text.trim();
    let iso = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(trimmed, iso) {
        return Ok(date);
    }
    OffsetDateTime::parse(trimmed, &Rfc3339)
        .map(OffsetDateTime::date)
        .map_err(|err| Error::InvalidDate {
            input: text.to_string(),
            reason: err.to_string(),
        })
}

/// Currencies with a known symbol and minor-unit precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
        }
    }

    fn minor_digits(self) -> usize {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            _ => Err(Error::UnknownCurrency(s.to_string())),
        }
    }
}

/// Render an amount as `-$1,234.56` style text.
///
/// Amounts exactly halfway between two minor units round away from zero.
///
/// # Errors
///
/// Non-finite amounts are rejected with [`Error::InvalidArgument`].
pub fn format_currency(amount: f64, currency: Currency) -> Result<String> {
    if !amount.is_finite() {
        return Err(Error::invalid_argument(
            "format_currency",
            format!("amount must be finite, got {amount}"),
        ));
    }

    let digits = currency.minor_digits();
    let fixed = to_fixed(amount.abs(), digits);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (fixed.as_str(), None),
    };
    // Rounding may turn tiny negatives into zero; keep `-` off those.
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(currency.symbol());
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    Ok(out)
}
