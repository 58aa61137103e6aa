// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Boolean predicates over user input.

use email_address::EmailAddress;

/// Whether `text` looks like a deliverable `local@domain.tld` address.
///
/// Syntax is checked by `email_address`; on top of that the address must
/// contain no whitespace and its domain must contain a dot.
pub fn is_valid_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    match text.parse::<EmailAddress>() {
        Ok(addr) => {
            let domain = addr.domain();
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        Err(_) => false,
    }
}

/// True for a missing value or one that is blank after trimming.
pub fn is_empty(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}
