// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities consumed by the web and mobile front ends.

pub mod asset_name;
pub mod data;
pub mod formatters;
pub mod hash;
pub mod numbers;
pub mod strings;
pub mod validators;

/// Resource-legal asset file names.
pub use asset_name::{is_valid_asset_name, sanitize_asset_name, sanitize_asset_path};
/// Collection and record helpers.
pub use data::{Record, chunk, deep_clone, group_by, group_by_field, omit, pick, to_record, unique};
/// Date and currency display.
pub use formatters::{Currency, format_currency, format_date, parse_date};
/// Content digests for change detection.
pub use hash::{hash_file, same_contents};
/// Number formatting and arithmetic.
pub use numbers::{
    DEFAULT_DECIMALS, calculate_percentage, clamp, format_bytes, format_number, random_int,
    random_int_with, round_to,
};
/// String manipulation.
pub use strings::{DEFAULT_TRUNCATE_LENGTH, get_initials, pluralize, slugify, truncate};
/// Input predicates.
pub use validators::{is_empty, is_valid_email};
