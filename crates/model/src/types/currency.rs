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

//! Represents a currency descriptor in ISO 4217 style.

use std::fmt::{Debug, Display};

use fpmoney_core::correctness::{FAILED, check_predicate_true, check_valid_string};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::types::fixed::check_fixed_precision;

/// Maximum length in characters for a currency code.
const CODE_MAX_LEN: usize = 6;

/// Represents a currency descriptor in ISO 4217 style.
///
/// Holds a short uppercase alphanumeric code together with the currency's
/// default number of fractional digits. Descriptors are master data: they are
/// expected to be long-lived, typically one per currency for the process
/// lifetime, and are cheap to copy and compare because both strings are
/// interned.
///
/// Equality and hashing cover all fields, which makes a descriptor directly
/// usable as a cache key. Note that [`ScaledCurrency`] equality deliberately
/// compares only the code, not the full descriptor.
///
/// [`ScaledCurrency`]: crate::types::ScaledCurrency
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// The currency code (e.g. an ISO 4217 three-letter code).
    pub code: Ustr,
    /// The default number of fractional digits as defined by ISO 4217.
    pub fraction_digits: u8,
    /// The human-readable currency name.
    pub name: Ustr,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is empty, longer than 6 characters, or contains a character
    ///   other than ASCII uppercase letters and digits.
    /// - `fraction_digits` exceeds the fixed-point precision bound.
    /// - `name` is an invalid string (e.g., is empty or non-ASCII).
    pub fn new_checked(code: &str, fraction_digits: u8, name: &str) -> anyhow::Result<Self> {
        check_valid_string(code, stringify!(code))?;
        check_predicate_true(
            code.len() <= CODE_MAX_LEN
                && code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            &format!("invalid currency code, was '{code}'"),
        )?;
        check_fixed_precision(fraction_digits)?;
        check_valid_string(name, stringify!(name))?;
        Ok(Self {
            code: Ustr::from(code),
            fraction_digits,
            name: Ustr::from(name),
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if any argument fails the checks documented on
    /// [`Currency::new_checked`].
    #[must_use]
    pub fn new(code: &str, fraction_digits: u8, name: &str) -> Self {
        Self::new_checked(code, fraction_digits, name).expect(FAILED)
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> Ustr {
        self.code
    }

    /// Returns the default number of fractional digits.
    #[inline]
    #[must_use]
    pub const fn fraction_digits(&self) -> u8 {
        self.fraction_digits
    }

    /// Returns the human-readable currency name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> Ustr {
        self.name
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code={}, fraction_digits={}, name='{}')",
            stringify!(Currency),
            self.code,
            self.fraction_digits,
            self.name,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
