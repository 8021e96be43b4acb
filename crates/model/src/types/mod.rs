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

//! Value types for tagging monetary quantities with currency and scale.
//!
//! This module provides the immutable [`ScaledCurrency`] value type together
//! with the collaborators it is built from: the [`Currency`] descriptor, the
//! [`FixedZero`] scale marker, and the [`PrecisionInterner`] that deduplicates
//! instances produced by the two precision policies.
//!
//! # Immutability
//!
//! All value types are **immutable** - once constructed, their values cannot
//! change. The only mutation anywhere in this module is internal: the lazily
//! memoized display string on [`ScaledCurrency`] and the insert-if-absent
//! tables of the [`PrecisionInterner`], both of which are idempotent and safe
//! under concurrent access without external locking.
//!
//! # Precision policies
//!
//! A [`ScaledCurrency`] can be resolved under three policies:
//!
//! | Policy      | Scale                                | Interned |
//! |-------------|--------------------------------------|----------|
//! | Explicit    | Taken from a caller-supplied marker. | No       |
//! | Standard    | The currency's ISO default.          | Yes      |
//! | Micro-units | Fixed at [`fixed::MICROS_SCALE`] (6).| Yes      |

pub mod currency;
pub mod fixed;
pub mod interning;
pub mod scaled_currency;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use currency::Currency;
pub use fixed::{FIXED_PRECISION, FixedZero, MICROS_SCALE};
pub use interning::PrecisionInterner;
pub use scaled_currency::{ScaledCurrency, SharedScaledCurrency};
