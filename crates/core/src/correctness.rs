// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Functions for condition checks similar to the *design by contract* approach.
//!
//! Each function validates a single condition and returns an `anyhow::Result`
//! carrying a descriptive message on failure. Checked constructors propagate
//! these errors with `?`; their unchecked twins call `.expect(FAILED)` so that
//! panics from invalid arguments share a common, greppable prefix.

use std::fmt::Display;

/// Common message prefix when a condition check fails and the caller panics.
pub const FAILED: &str = "Condition failed";

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error if `predicate` is false.
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the string `value` is valid: non-empty, not whitespace-only, and ASCII.
///
/// # Errors
///
/// Returns an error if `value` is empty, consists only of whitespace, or
/// contains a non-ASCII character.
pub fn check_valid_string(value: &str, param: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty")
    }
    if value.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace")
    }
    if !value.is_ascii() {
        anyhow::bail!("invalid string for '{param}' contained a non-ASCII char, was '{value}'")
    }
    Ok(())
}

/// Checks the `value` is within the given inclusive range.
///
/// # Errors
///
/// Returns an error if `value` is outside `[l, r]`.
pub fn check_in_range_inclusive<T>(value: T, l: T, r: T, param: &str) -> anyhow::Result<()>
where
    T: PartialOrd + Display,
{
    if value < l || value > r {
        anyhow::bail!("invalid {param}, was {value} (not in range [{l}, {r}])")
    }
    Ok(())
}
