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

//! Represents a currency paired with a chosen decimal precision.

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    sync::{Arc, OnceLock},
};

use fpmoney_core::correctness::FAILED;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::types::{currency::Currency, fixed::FixedZero, interning::PrecisionInterner};

/// A thread-safe shared pointer to a [`ScaledCurrency`], as handed out by the
/// interning tables. Reference identity (`Arc::ptr_eq`) is only meaningful for
/// instances obtained through an interner; value equality holds regardless.
pub type SharedScaledCurrency = Arc<ScaledCurrency>;

/// Represents a currency paired with a chosen decimal precision.
///
/// By default the number of decimals corresponds to the one of the real
/// currency as defined by ISO 4217; the micro-units policy fixes it at 6
/// instead, and an explicit zero marker selects any other scale. Instances
/// are immutable.
///
/// Equality compares only the currency *code* and the scale marker: two
/// instances built from distinct descriptor objects that agree on the code
/// and scale are equal, whatever else the descriptors disagree on. The
/// canonical display string is computed once on first access, memoized for
/// the lifetime of the instance, and excluded from equality, hashing and
/// serialization.
#[derive(Clone, Serialize, Deserialize)]
pub struct ScaledCurrency {
    currency: Currency,
    zero: FixedZero,
    #[serde(skip)]
    display: OnceLock<String>,
}

impl ScaledCurrency {
    /// Creates a new [`ScaledCurrency`] instance for the given currency, with
    /// the scale taken from the supplied zero `reference` marker.
    #[must_use]
    pub fn new(currency: Currency, reference: FixedZero) -> Self {
        Self {
            currency,
            zero: reference,
            display: OnceLock::new(),
        }
    }

    /// Creates a new [`ScaledCurrency`] instance for the given currency, with
    /// the scale resolved from the currency's own default fraction digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency's fraction digits exceed the
    /// fixed-point precision bound.
    pub fn from_currency_checked(currency: Currency) -> anyhow::Result<Self> {
        let zero = FixedZero::for_scale_checked(currency.fraction_digits())?;
        Ok(Self::new(currency, zero))
    }

    /// Creates a new [`ScaledCurrency`] instance for the given currency, with
    /// the scale resolved from the currency's own default fraction digits.
    ///
    /// # Panics
    ///
    /// Panics if the currency's fraction digits exceed the fixed-point
    /// precision bound.
    #[must_use]
    pub fn from_currency(currency: Currency) -> Self {
        Self::from_currency_checked(currency).expect(FAILED)
    }

    /// Returns a possibly cached instance for a currency at its default
    /// precision, resolved through the process-wide interner.
    #[must_use]
    pub fn std_precision_of(currency: Currency) -> SharedScaledCurrency {
        PrecisionInterner::global().std_precision_of(currency)
    }

    /// Returns a possibly cached instance for a currency at micro-units
    /// precision (6 decimals), resolved through the process-wide interner.
    #[must_use]
    pub fn micros_precision_of(currency: Currency) -> SharedScaledCurrency {
        PrecisionInterner::global().micros_precision_of(currency)
    }

    /// Returns an instance for the same currency at its default precision.
    ///
    /// Returns `self` unchanged when the scale already matches, otherwise
    /// resolves through the process-wide interner.
    #[must_use]
    pub fn with_default_precision(self: Arc<Self>) -> SharedScaledCurrency {
        PrecisionInterner::global().with_default_precision(self)
    }

    /// Returns an instance for the same currency at micro-units precision.
    ///
    /// Returns `self` unchanged when the scale is already 6, otherwise
    /// resolves through the process-wide interner.
    #[must_use]
    pub fn with_micros_precision(self: Arc<Self>) -> SharedScaledCurrency {
        PrecisionInterner::global().with_micros_precision(self)
    }

    /// Returns the currency descriptor.
    #[inline]
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the zero marker carrying this instance's scale.
    #[inline]
    #[must_use]
    pub const fn zero(&self) -> FixedZero {
        self.zero
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> Ustr {
        self.currency.code()
    }

    /// Returns the number of decimals (fractional digits) of this instance.
    #[inline]
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.zero.scale()
    }

    /// Returns the canonical string: the bare currency code when the scale
    /// matches the currency's default fraction digits, else `CODE:scale`.
    ///
    /// The string is computed on first access and memoized. A concurrent
    /// first access may compute it more than once; the winning computation is
    /// retained and every caller observes the same bytes.
    pub fn as_str(&self) -> &str {
        self.display.get_or_init(|| {
            if self.zero.scale() == self.currency.fraction_digits() {
                self.currency.code().to_string()
            } else {
                format!("{}:{}", self.currency.code(), self.zero.scale())
            }
        })
    }
}

impl PartialEq for ScaledCurrency {
    fn eq(&self, other: &Self) -> bool {
        // Descriptors are not compared in full: two descriptor objects for the
        // same code may disagree on other fields, so only the code counts.
        self.currency.code() == other.currency.code() && self.zero == other.zero
    }
}

impl Eq for ScaledCurrency {}

impl Hash for ScaledCurrency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.code().hash(state);
        self.zero.hash(state);
    }
}

impl Debug for ScaledCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", stringify!(ScaledCurrency), self.as_str())
    }
}

impl Display for ScaledCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
