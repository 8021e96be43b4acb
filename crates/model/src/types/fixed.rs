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

//! Fixed-point precision constants and the scale registry.
//!
//! This module enforces the fixed-point precision strategy for the workspace:
//! every scale used by a value type must lie within `0..=FIXED_PRECISION`.
//! The [`FixedZero`] marker is the canonical zero value at a given scale and
//! is used by [`ScaledCurrency`] purely to carry that scale.
//!
//! [`ScaledCurrency`]: crate::types::ScaledCurrency

use std::fmt::{Debug, Display};

use fpmoney_core::correctness::{FAILED, check_in_range_inclusive};
use serde::{Deserialize, Serialize};

/// The maximum fixed-point precision (number of fractional digits).
pub const FIXED_PRECISION: u8 = 16;

/// The scale used by the micro-units precision policy, independent of any
/// currency's ISO default.
pub const MICROS_SCALE: u8 = 6;

/// Checks the fixed-point `precision` does not exceed [`FIXED_PRECISION`].
///
/// # Errors
///
/// Returns an error if `precision` exceeds [`FIXED_PRECISION`].
pub fn check_fixed_precision(precision: u8) -> anyhow::Result<()> {
    check_in_range_inclusive(precision, 0, FIXED_PRECISION, "precision")
}

/// The canonical zero value at a specific fixed-point scale.
///
/// Markers are plain `Copy` scale tags: two markers of equal scale are
/// indistinguishable, so marker equality is exactly scale equality. The type
/// exists so a scale travels with value types as "zero at scale N" rather
/// than as a bare integer.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FixedZero {
    scale: u8,
}

impl FixedZero {
    /// The zero marker at the micro-units scale of 6.
    pub const MICROS: Self = Self { scale: MICROS_SCALE };

    /// Returns the canonical zero marker for the given `scale`.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` exceeds [`FIXED_PRECISION`].
    pub fn for_scale_checked(scale: u8) -> anyhow::Result<Self> {
        check_fixed_precision(scale)?;
        Ok(Self { scale })
    }

    /// Returns the canonical zero marker for the given `scale`.
    ///
    /// # Panics
    ///
    /// Panics if `scale` exceeds [`FIXED_PRECISION`].
    #[must_use]
    pub fn for_scale(scale: u8) -> Self {
        Self::for_scale_checked(scale).expect(FAILED)
    }

    /// Returns the number of fractional digits this marker represents.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> u8 {
        self.scale
    }
}

impl Debug for FixedZero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(FixedZero), self.scale)
    }
}

impl Display for FixedZero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == 0 {
            write!(f, "0")
        } else {
            write!(f, "0.{:0>width$}", 0, width = self.scale as usize)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(MICROS_SCALE)]
    #[case(FIXED_PRECISION)]
    fn test_for_scale_valid(#[case] scale: u8) {
        let zero = FixedZero::for_scale(scale);
        assert_eq!(zero.scale(), scale);
    }

    #[rstest]
    fn test_for_scale_checked_out_of_range() {
        let result = FixedZero::for_scale_checked(FIXED_PRECISION + 1);
        assert!(result.is_err());
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_for_scale_out_of_range_panics() {
        let _ = FixedZero::for_scale(FIXED_PRECISION + 1);
    }

    #[rstest]
    fn test_micros_constant() {
        assert_eq!(FixedZero::MICROS, FixedZero::for_scale(6));
        assert_eq!(FixedZero::MICROS.scale(), MICROS_SCALE);
    }

    #[rstest]
    fn test_equality_is_scale_equality() {
        assert_eq!(FixedZero::for_scale(2), FixedZero::for_scale(2));
        assert_ne!(FixedZero::for_scale(2), FixedZero::for_scale(6));
        assert!(FixedZero::for_scale(2) < FixedZero::for_scale(6));
    }

    #[rstest]
    #[case(0, "0")]
    #[case(2, "0.00")]
    #[case(6, "0.000000")]
    fn test_string_reprs(#[case] scale: u8, #[case] expected: &str) {
        let zero = FixedZero::for_scale(scale);
        assert_eq!(zero.to_string(), expected);
        assert_eq!(format!("{zero:?}"), format!("FixedZero({scale})"));
    }

    #[rstest]
    fn test_serde_round_trip() {
        let zero = FixedZero::for_scale(6);
        let json = serde_json::to_string(&zero).unwrap();
        let deserialized: FixedZero = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, zero);
    }
}
