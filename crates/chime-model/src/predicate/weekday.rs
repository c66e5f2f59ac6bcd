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
use chime_core::time::calendar;
use chrono::NaiveDate;

/// A continuous predicate matching one day of the week.
///
/// Numbering follows ISO 8601: 1 is Monday, 7 is Sunday. The set it
/// denotes is the union of all whole calendar days with that weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weekday {
    number: u32,
}

impl Weekday {
    pub const MONDAY: Weekday = Weekday { number: 1 };
    pub const TUESDAY: Weekday = Weekday { number: 2 };
    pub const WEDNESDAY: Weekday = Weekday { number: 3 };
    pub const THURSDAY: Weekday = Weekday { number: 4 };
    pub const FRIDAY: Weekday = Weekday { number: 5 };
    pub const SATURDAY: Weekday = Weekday { number: 6 };
    pub const SUNDAY: Weekday = Weekday { number: 7 };

    /// Creates a new `Weekday` predicate.
    pub fn new(number: u32) -> Result<Self, ParameterError> {
        if !(1..=7).contains(&number) {
            return Err(ParameterError::WeekdayOutOfRange(number));
        }
        Ok(Self { number })
    }

    /// Returns the ISO weekday number, `1..=7`.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns `true` if `date` falls on this weekday.
    #[inline]
    pub fn matches(&self, date: NaiveDate) -> bool {
        calendar::weekday_number(date) == self.number
    }

    /// Returns how many days lie between `date` and the next date with
    /// this weekday: zero when `date` itself matches, otherwise `1..=6`.
    #[inline]
    pub fn days_until(&self, date: NaiveDate) -> u32 {
        (self.number + 7 - calendar::weekday_number(date)) % 7
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [&str; 7] = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        write!(f, "{}", NAMES[(self.number - 1) as usize])
    }
}
