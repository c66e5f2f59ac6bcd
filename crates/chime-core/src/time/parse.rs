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

//! String input adapters.
//!
//! Two fixed shapes are accepted: wall-clock times written as `HH`,
//! `HH:MM` or `HH:MM:SS` (components need not be zero-padded and may be
//! surrounded by whitespace), and instants written as
//! `YYYY-MM-DD HH:MM:SS` with either a space or a `T` separating date
//! and time.

use crate::time::time_of_day::TimeOfDay;
use chrono::NaiveDateTime;

/// Details about a string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse.
    pub input: String,
    /// A short description of the shape that was expected.
    pub expected: &'static str,
}

impl ParseError {
    fn new(input: &str, expected: &'static str) -> Self {
        Self {
            input: input.to_owned(),
            expected,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not parse '{}' as {}",
            self.input, self.expected
        )
    }
}

impl std::error::Error for ParseError {}

const TIME_SHAPE: &str = "a time of day (HH, HH:MM or HH:MM:SS)";
const INSTANT_SHAPE: &str = "an instant (YYYY-MM-DD HH:MM:SS)";

/// Parses a wall-clock time.
///
/// Missing minute and second components default to zero.
pub fn time_of_day(s: &str) -> Result<TimeOfDay, ParseError> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() > 3 {
        return Err(ParseError::new(s, TIME_SHAPE));
    }

    let component = |part: &str| -> Result<u32, ParseError> {
        part.trim()
            .parse::<u32>()
            .map_err(|_| ParseError::new(s, TIME_SHAPE))
    };

    let hour = component(parts[0])?;
    let minute = if parts.len() >= 2 { component(parts[1])? } else { 0 };
    let second = if parts.len() == 3 { component(parts[2])? } else { 0 };

    TimeOfDay::new(hour, minute, second).map_err(|_| ParseError::new(s, TIME_SHAPE))
}

/// Parses an instant, accepting a space or `T` between date and time.
pub fn instant(s: &str) -> Result<NaiveDateTime, ParseError> {
    const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    for format in FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s.trim(), format) {
            return Ok(t);
        }
    }
    Err(ParseError::new(s, INSTANT_SHAPE))
}
