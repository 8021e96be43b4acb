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

//! Currency and decimal-precision domain model for fixed-point monetary values.
//!
//! This crate defines the immutable value types used to tag fixed-point
//! monetary quantities with a currency and a decimal scale:
//!
//! - [`types::Currency`] — an ISO-4217-style currency descriptor.
//! - [`types::FixedZero`] — a zero-value marker carrying a fixed-point scale.
//! - [`types::ScaledCurrency`] — a currency paired with a chosen scale.
//! - [`types::PrecisionInterner`] — process-wide interning of the instances
//!   produced by the standard and micro-units precision policies.

pub mod types;
