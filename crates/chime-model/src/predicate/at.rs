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

use chime_core::time::time_of_day::TimeOfDay;
use chrono::NaiveDateTime;

/// A discrete predicate firing once per calendar day, at exactly the
/// given wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct At {
    time: TimeOfDay,
}

impl At {
    /// Creates a new `At` predicate.
    #[inline]
    pub const fn new(time: TimeOfDay) -> Self {
        Self { time }
    }

    /// Returns the firing time of day.
    #[inline]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns `true` if `t` is a firing instant.
    #[inline]
    pub fn matches(&self, t: NaiveDateTime) -> bool {
        t.time() == self.time.to_naive_time()
    }

    /// Returns the next firing instant at or after `t`, or `None` at the
    /// end of the supported calendar.
    pub fn next_firing(&self, t: NaiveDateTime) -> Option<NaiveDateTime> {
        let today = t.date().and_time(self.time.to_naive_time());
        if today >= t {
            Some(today)
        } else {
            t.date()
                .succ_opt()
                .map(|tomorrow| tomorrow.and_time(self.time.to_naive_time()))
        }
    }
}

impl std::fmt::Display for At {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at {}", self.time)
    }
}
