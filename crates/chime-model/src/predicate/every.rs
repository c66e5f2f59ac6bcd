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

use chime_core::error::ParameterError;
use chime_core::num::ceil_div;
use chime_core::time::calendar::{from_epoch_seconds, to_epoch_seconds};
use chrono::{NaiveDateTime, Timelike};

/// A discrete predicate firing on an evenly spaced grid of instants.
///
/// The grid is `anchor + k * period` for integer k, extending in both
/// directions. The anchor defaults to the instant of construction,
/// truncated to the second, so "every 7 minutes" really means every
/// 7 minutes — the grid never snaps to hour or minute boundaries. The
/// observable contract is only the spacing; the absolute phase is an
/// implementation choice unless pinned with [`Every::with_anchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Every {
    period: i64,
    anchor: i64,
}

impl Every {
    /// Creates a grid with the given period in seconds, anchored at the
    /// current wall-clock instant.
    pub fn new(period_seconds: i64) -> Result<Self, ParameterError> {
        if period_seconds <= 0 {
            return Err(ParameterError::NonPositivePeriod(period_seconds));
        }
        Ok(Self {
            period: period_seconds,
            anchor: to_epoch_seconds(chrono::Local::now().naive_local()),
        })
    }

    /// Pins the grid to run through the given instant.
    ///
    /// Sub-second components of `anchor` are truncated.
    #[inline]
    pub fn with_anchor(mut self, anchor: NaiveDateTime) -> Self {
        self.anchor = to_epoch_seconds(anchor);
        self
    }

    /// Returns the period in seconds.
    #[inline]
    pub const fn period_seconds(&self) -> i64 {
        self.period
    }

    /// Returns the anchor as seconds on the linear timeline.
    #[inline]
    pub const fn anchor_seconds(&self) -> i64 {
        self.anchor
    }

    /// Returns `true` if `t` lies exactly on the grid.
    pub fn matches(&self, t: NaiveDateTime) -> bool {
        t.nanosecond() == 0
            && (to_epoch_seconds(t) - self.anchor).rem_euclid(self.period) == 0
    }

    /// Returns the first grid instant at or after `t`, or `None` past the
    /// end of the supported calendar.
    pub fn next_firing(&self, t: NaiveDateTime) -> Option<NaiveDateTime> {
        let mut seconds = to_epoch_seconds(t);
        if t.nanosecond() > 0 {
            // t lies strictly inside the second its count names.
            seconds = seconds.checked_add(1)?;
        }
        let steps = ceil_div(seconds.checked_sub(self.anchor)?, self.period);
        let fire = self.anchor.checked_add(steps.checked_mul(self.period)?)?;
        from_epoch_seconds(fire)
    }
}

impl std::fmt::Display for Every {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "every {}s", self.period)
    }
}
