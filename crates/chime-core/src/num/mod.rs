// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Euclidean division helpers for periodic grid arithmetic.
//!
//! Laying out an evenly spaced grid of instants from an anchor requires
//! division that rounds consistently for times before and after the
//! anchor. Plain integer division truncates towards zero, which would
//! shift the grid by one step on the negative side; these helpers round
//! towards negative and positive infinity instead.

use num_traits::{Euclid, PrimInt};

/// Division rounding towards negative infinity.
///
/// `divisor` must be positive.
#[inline]
pub fn floor_div<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt + Euclid,
{
    debug_assert!(divisor > T::zero(), "floor_div requires a positive divisor");
    dividend.div_euclid(&divisor)
}

/// Division rounding towards positive infinity.
///
/// `divisor` must be positive.
///
/// # Examples
///
/// ```rust
/// # use chime_core::num::ceil_div;
///
/// assert_eq!(ceil_div(10, 5), 2);
/// assert_eq!(ceil_div(11, 5), 3);
/// assert_eq!(ceil_div(-11, 5), -2);
/// ```
#[inline]
pub fn ceil_div<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt + Euclid,
{
    debug_assert!(divisor > T::zero(), "ceil_div requires a positive divisor");
    let quotient = dividend.div_euclid(&divisor);
    if dividend.rem_euclid(&divisor) != T::zero() {
        quotient + T::one()
    } else {
        quotient
    }
}
