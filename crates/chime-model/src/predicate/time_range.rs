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

use chime_core::math::span::Span;
use chime_core::time::calendar::SECONDS_PER_DAY;
use chime_core::time::time_of_day::TimeOfDay;
use smallvec::{smallvec, SmallVec};

/// A continuous predicate matching a daily window of wall-clock time.
///
/// The window is half-open: `[start, end)` contains `start` and excludes
/// `end`. When `start > end` the window wraps through midnight, i.e. it
/// is `[start, 24:00) ∪ [00:00, end)`. `start == end` denotes the empty
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeRange {
    /// Creates a new `TimeRange`. Every pair of times is valid; see the
    /// type documentation for the wrap-around and empty cases.
    #[inline]
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start of the window.
    #[inline]
    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Returns the exclusive end of the window.
    #[inline]
    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Returns `true` if the window denotes the empty set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Decomposes the window into forward spans of seconds-in-day.
    ///
    /// A forward window yields one span, a wrapping window up to two,
    /// and the empty window none.
    pub fn day_windows(&self) -> SmallVec<[Span<u32>; 2]> {
        let start = self.start.seconds_in_day();
        let end = self.end.seconds_in_day();

        if start == end {
            smallvec![]
        } else if start < end {
            smallvec![Span::new(start, end)]
        } else {
            let mut windows: SmallVec<[Span<u32>; 2]> =
                smallvec![Span::new(start, SECONDS_PER_DAY as u32)];
            if end > 0 {
                windows.push(Span::new(0, end));
            }
            windows
        }
    }

    /// Returns `true` if the given offset from midnight lies inside the
    /// window.
    #[inline]
    pub fn contains_seconds(&self, seconds_in_day: u32) -> bool {
        self.day_windows()
            .iter()
            .any(|window| window.contains_point(seconds_in_day))
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
