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

//! Helper fixtures for stubbing currency descriptors in tests.

use rstest::fixture;

use crate::types::currency::Currency;

/// United States dollar, 2 default fraction digits.
#[fixture]
pub fn currency_usd() -> Currency {
    Currency::new("USD", 2, "United States dollar")
}

/// Japanese yen, no fractional digits.
#[fixture]
pub fn currency_jpy() -> Currency {
    Currency::new("JPY", 0, "Japanese yen")
}

/// Bahraini dinar, 3 default fraction digits.
#[fixture]
pub fn currency_bhd() -> Currency {
    Currency::new("BHD", 3, "Bahraini dinar")
}

/// Swiss franc, 2 default fraction digits.
#[fixture]
pub fn currency_chf() -> Currency {
    Currency::new("CHF", 2, "Swiss franc")
}
