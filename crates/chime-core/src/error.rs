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

/// The error type for out-of-range schedule parameters.
///
/// Raised synchronously by the constructor of the offending value, never
/// deferred to evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// An hour component outside `0..=23`.
    HourOutOfRange(u32),
    /// A minute component outside `0..=59`.
    MinuteOutOfRange(u32),
    /// A second component outside `0..=59`.
    SecondOutOfRange(u32),
    /// A weekday number outside `1..=7`.
    WeekdayOutOfRange(u32),
    /// A day-of-month index outside `1..=31` and `-31..=-1`.
    DayOfMonthOutOfRange(i32),
    /// A day-of-month range whose start lies after its end.
    DayRangeInverted { from: i32, to: i32 },
    /// A periodic schedule with a period of zero or fewer seconds.
    NonPositivePeriod(i64),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HourOutOfRange(v) => write!(f, "hour must be 0-23, not {}", v),
            Self::MinuteOutOfRange(v) => write!(f, "minute must be 0-59, not {}", v),
            Self::SecondOutOfRange(v) => write!(f, "second must be 0-59, not {}", v),
            Self::WeekdayOutOfRange(v) => write!(f, "weekday must be 1-7, not {}", v),
            Self::DayOfMonthOutOfRange(v) => write!(
                f,
                "day must be between 1 and 31 (or between -31 and -1), not {}",
                v
            ),
            Self::DayRangeInverted { from, to } => {
                write!(f, "day range start {} must not be after end {}", from, to)
            }
            Self::NonPositivePeriod(v) => {
                write!(f, "period must be a positive number of seconds, not {}", v)
            }
        }
    }
}

impl std::error::Error for ParameterError {}
