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
use chime_core::math::span::Span;
use chime_core::time::calendar;
use chrono::{Datelike, NaiveDate};

/// A continuous predicate matching a day of the month, or an inclusive
/// run of days.
///
/// Negative indices count from the end of the month: -1 is the last day,
/// -2 the day before it, and so on. An index that does not exist in a
/// given month (the 31st of April, or -30 in February) simply fails to
/// match for that month; there is no rounding to the nearest real day.
///
/// A range is inclusive on both ends. Same-sign ranges must run forwards
/// (`from <= to`); a mixed-sign range such as `(15, -1)` — "the 15th
/// through the last day" — has no fixed order until the month is known
/// and is resolved per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOfMonth {
    day: i32,
    day2: Option<i32>,
}

impl DayOfMonth {
    /// Creates a predicate matching a single day of the month.
    pub fn new(day: i32) -> Result<Self, ParameterError> {
        Self::validate(day)?;
        Ok(Self { day, day2: None })
    }

    /// Creates a predicate matching the inclusive run `from..=to`.
    pub fn range(from: i32, to: i32) -> Result<Self, ParameterError> {
        Self::validate(from)?;
        Self::validate(to)?;
        if from.signum() == to.signum() && from > to {
            return Err(ParameterError::DayRangeInverted { from, to });
        }
        Ok(Self {
            day: from,
            day2: Some(to),
        })
    }

    fn validate(day: i32) -> Result<(), ParameterError> {
        if !(1..=31).contains(&day) && !(-31..=-1).contains(&day) {
            return Err(ParameterError::DayOfMonthOutOfRange(day));
        }
        Ok(())
    }

    /// Resolves the matching days for one month as a half-open span of
    /// day numbers, or `None` if nothing in that month matches.
    ///
    /// A negative index `d` resolves to `days_in_month + d + 1`; a
    /// mixed-sign range whose resolution comes out inverted is swapped.
    pub fn resolved_days(&self, year: i32, month: u32) -> Option<Span<i64>> {
        let len = calendar::days_in_month(year, month) as i64;
        let resolve = |day: i32| -> i64 {
            let day = day as i64;
            if day < 0 { len + day + 1 } else { day }
        };

        let (lo, hi) = match self.day2 {
            None => {
                let day = resolve(self.day);
                (day, day)
            }
            Some(day2) => {
                let mut lo = resolve(self.day);
                let mut hi = resolve(day2);
                if hi < lo {
                    std::mem::swap(&mut lo, &mut hi);
                }
                (lo, hi)
            }
        };
        // Clip against the days the month actually has.
        Span::new(lo, hi + 1).intersection(Span::new(1, len + 1))
    }

    /// Returns `true` if `date` falls on a matching day of its month.
    #[inline]
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.resolved_days(date.year(), date.month())
            .is_some_and(|days| days.contains_point(date.day() as i64))
    }
}

impl std::fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.day2 {
            None => write!(f, "day {}", self.day),
            Some(day2) => write!(f, "day {}..={}", self.day, day2),
        }
    }
}
