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

//! Interning of scaled-currency instances for the two cached precision policies.

use std::sync::{Arc, OnceLock};

use dashmap::{DashMap, mapref::entry::Entry};

use crate::types::{
    currency::Currency,
    fixed::FixedZero,
    scaled_currency::{ScaledCurrency, SharedScaledCurrency},
};

type InternMap = DashMap<Currency, SharedScaledCurrency, ahash::RandomState>;

static GLOBAL_INTERNER: OnceLock<PrecisionInterner> = OnceLock::new();

/// Interns [`ScaledCurrency`] instances per currency for the standard and
/// micro-units precision policies.
///
/// The interner holds two independent sharded concurrent maps, one per
/// policy, so repeated lookups for the same currency return the same shared
/// instance. Entries live for the lifetime of the interner: there is no
/// eviction, and unbounded growth is acceptable because the key domain is the
/// set of currencies in use.
///
/// Lookups are lock-free for readers of existing entries. On a first-time
/// miss the instance is constructed *outside* the map and inserted only if no
/// other thread inserted one in the meantime; a losing instance is simply
/// dropped. At most one instance per (currency, policy) ever becomes durable,
/// and every caller receives that winning instance.
#[derive(Debug, Default)]
pub struct PrecisionInterner {
    std: InternMap,
    micros: InternMap,
}

impl PrecisionInterner {
    /// Creates a new empty [`PrecisionInterner`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide interner, creating it on first use.
    ///
    /// The instance is never torn down.
    pub fn global() -> &'static Self {
        GLOBAL_INTERNER.get_or_init(Self::new)
    }

    /// Returns a possibly cached instance for a currency at its default
    /// precision.
    pub fn std_precision_of(&self, currency: Currency) -> SharedScaledCurrency {
        if let Some(entry) = self.std.get(&currency) {
            return Arc::clone(entry.value());
        }
        let fresh = Arc::new(ScaledCurrency::from_currency(currency));
        Self::intern(&self.std, currency, fresh, "standard")
    }

    /// Returns a possibly cached instance for a currency at micro-units
    /// precision (6 decimals).
    pub fn micros_precision_of(&self, currency: Currency) -> SharedScaledCurrency {
        if let Some(entry) = self.micros.get(&currency) {
            return Arc::clone(entry.value());
        }
        let fresh = Arc::new(ScaledCurrency::new(currency, FixedZero::MICROS));
        Self::intern(&self.micros, currency, fresh, "micros")
    }

    /// Returns an instance for the same currency at its default precision,
    /// reusing `value` when its scale already matches.
    pub fn with_default_precision(&self, value: SharedScaledCurrency) -> SharedScaledCurrency {
        if value.decimals() == value.currency().fraction_digits() {
            value
        } else {
            self.std_precision_of(value.currency())
        }
    }

    /// Returns an instance for the same currency at micro-units precision,
    /// reusing `value` when its scale is already 6.
    pub fn with_micros_precision(&self, value: SharedScaledCurrency) -> SharedScaledCurrency {
        if value.decimals() == FixedZero::MICROS.scale() {
            value
        } else {
            self.micros_precision_of(value.currency())
        }
    }

    /// Returns the total number of interned instances across both policies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.std.len() + self.micros.len()
    }

    /// Returns true if no instance has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.std.is_empty() && self.micros.is_empty()
    }

    fn intern(
        map: &InternMap,
        currency: Currency,
        fresh: SharedScaledCurrency,
        policy: &str,
    ) -> SharedScaledCurrency {
        // Accepted race: another thread may have interned an equal instance
        // since the read above, in which case `fresh` is dropped unused.
        match map.entry(currency) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                log::debug!("Interned {policy} precision instance for {}", currency.code());
                Arc::clone(entry.insert(fresh).value())
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::{
        sync::Barrier,
        thread,
    };

    use rstest::rstest;

    use super::*;
    use crate::types::stubs::*;

    #[rstest]
    fn test_starts_empty() {
        let interner = PrecisionInterner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.len(), 0);
    }

    #[rstest]
    fn test_std_precision_of_returns_identical_instance(currency_usd: Currency) {
        let interner = PrecisionInterner::new();
        let first = interner.std_precision_of(currency_usd);
        let second = interner.std_precision_of(currency_usd);
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.decimals(), 2);
        assert_eq!(interner.len(), 1);
    }

    #[rstest]
    fn test_micros_precision_of_returns_identical_instance(currency_jpy: Currency) {
        let interner = PrecisionInterner::new();
        let first = interner.micros_precision_of(currency_jpy);
        let second = interner.micros_precision_of(currency_jpy);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.decimals(), 6);
    }

    #[rstest]
    fn test_policy_tables_are_independent(currency_usd: Currency) {
        let interner = PrecisionInterner::new();
        let std = interner.std_precision_of(currency_usd);
        let micros = interner.micros_precision_of(currency_usd);
        assert_ne!(std, micros);
        assert_eq!(interner.len(), 2);
    }

    #[rstest]
    fn test_std_equals_micros_iff_default_is_six(currency_usd: Currency) {
        let interner = PrecisionInterner::new();
        // USD defaults to 2 digits, so the policies disagree
        assert_ne!(
            interner.std_precision_of(currency_usd),
            interner.micros_precision_of(currency_usd),
        );
        // A currency whose default is exactly 6 resolves equal under both
        let six = Currency::new("XSD", 6, "Six-digit test unit");
        assert_eq!(
            interner.std_precision_of(six),
            interner.micros_precision_of(six),
        );
    }

    #[rstest]
    fn test_distinct_currencies_intern_distinct_entries(
        currency_usd: Currency,
        currency_jpy: Currency,
        currency_bhd: Currency,
    ) {
        let interner = PrecisionInterner::new();
        let usd = interner.std_precision_of(currency_usd);
        let jpy = interner.std_precision_of(currency_jpy);
        let bhd = interner.std_precision_of(currency_bhd);
        assert_ne!(usd, jpy);
        assert_ne!(jpy, bhd);
        assert_eq!(interner.len(), 3);
        assert_eq!(jpy.decimals(), 0);
        assert_eq!(bhd.decimals(), 3);
    }

    #[rstest]
    fn test_with_default_precision_idempotent_and_stable(currency_usd: Currency) {
        let interner = PrecisionInterner::new();
        let micros = interner.micros_precision_of(currency_usd);
        let once = interner.with_default_precision(Arc::clone(&micros));
        let twice = interner.with_default_precision(Arc::clone(&once));
        assert_eq!(once.decimals(), 2);
        assert_eq!(once, twice);
        assert!(Arc::ptr_eq(&once, &twice));
        assert!(Arc::ptr_eq(&once, &interner.std_precision_of(currency_usd)));
    }

    #[rstest]
    fn test_with_micros_precision_round_trips(currency_usd: Currency) {
        let interner = PrecisionInterner::new();
        let std = interner.std_precision_of(currency_usd);
        let micros = interner.with_micros_precision(Arc::clone(&std));
        let back = interner.with_default_precision(Arc::clone(&micros));
        assert_eq!(micros.decimals(), 6);
        assert!(Arc::ptr_eq(&std, &back));
    }

    #[rstest]
    fn test_global_interner_is_stable(currency_chf: Currency) {
        let first = ScaledCurrency::std_precision_of(currency_chf);
        let second = ScaledCurrency::std_precision_of(currency_chf);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[rstest]
    fn test_concurrent_first_access_yields_single_durable_instance(currency_usd: Currency) {
        const N: usize = 16;
        let interner = PrecisionInterner::new();
        let barrier = Barrier::new(N);

        let results: Vec<SharedScaledCurrency> = thread::scope(|s| {
            let handles: Vec<_> = (0..N)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        interner.micros_precision_of(currency_usd)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let durable = interner.micros_precision_of(currency_usd);
        assert_eq!(interner.micros.len(), 1);
        for result in &results {
            assert_eq!(result.as_ref(), durable.as_ref());
            assert!(Arc::ptr_eq(result, &durable));
        }
    }
}
