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

use crate::error::ParameterError;
use crate::time::parse::{self, ParseError};
use chrono::NaiveTime;
use std::str::FromStr;

/// A wall-clock time at second precision.
///
/// Components are validated at construction, so every value of this type
/// names a real second of a calendar day.
///
/// # Examples
///
/// ```rust
/// # use chime_core::time::time_of_day::TimeOfDay;
///
/// let t: TimeOfDay = "14:15:16".parse().unwrap();
/// assert_eq!(t.seconds_in_day(), 14 * 3600 + 15 * 60 + 16);
///
/// // Leading zeros may be omitted; missing components default to zero.
/// assert_eq!("8:9".parse::<TimeOfDay>().unwrap(), TimeOfDay::new(8, 9, 0).unwrap());
/// assert_eq!("12".parse::<TimeOfDay>().unwrap(), TimeOfDay::new(12, 0, 0).unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    /// The first second of the day, `00:00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a new `TimeOfDay` from validated components.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ParameterError> {
        if hour > 23 {
            return Err(ParameterError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ParameterError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(ParameterError::SecondOutOfRange(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour component, `0..=23`.
    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute component, `0..=59`.
    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the second component, `0..=59`.
    #[inline]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Returns the offset from midnight in seconds, `0..=86_399`.
    #[inline]
    pub const fn seconds_in_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Returns this time with the seconds component cleared.
    #[inline]
    pub const fn floor_to_minute(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hour,
            minute: self.minute,
            second: 0,
        }
    }

    /// Converts into the equivalent `chrono::NaiveTime`.
    #[inline]
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
            .expect("components are validated at construction")
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::time_of_day(s)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
