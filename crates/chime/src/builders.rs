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

//! Named constructors for the primitive schedules.
//!
//! The string-taking builders parse their arguments with the input
//! adapters and report malformed input through [`BuildError`]; the
//! `*_of`/`*_time` variants take already-validated values and cannot
//! fail.

use crate::schedule::Schedule;
use chime_core::time::parse;
use chime_core::time::time_of_day::TimeOfDay;
use chime_model::error::BuildError;
use chime_model::expr::Expr;
use chime_model::predicate::{At, DayOfMonth, Every, TimeRange, Weekday};
use std::sync::Arc;

fn leaf(expr: Expr) -> Schedule {
    Schedule::from_expr(Arc::new(expr))
}

/// The set of all Mondays.
pub fn monday() -> Schedule {
    leaf(Expr::Weekday(Weekday::MONDAY))
}

/// The set of all Tuesdays.
pub fn tuesday() -> Schedule {
    leaf(Expr::Weekday(Weekday::TUESDAY))
}

/// The set of all Wednesdays.
pub fn wednesday() -> Schedule {
    leaf(Expr::Weekday(Weekday::WEDNESDAY))
}

/// The set of all Thursdays.
pub fn thursday() -> Schedule {
    leaf(Expr::Weekday(Weekday::THURSDAY))
}

/// The set of all Fridays.
pub fn friday() -> Schedule {
    leaf(Expr::Weekday(Weekday::FRIDAY))
}

/// The set of all Saturdays.
pub fn saturday() -> Schedule {
    leaf(Expr::Weekday(Weekday::SATURDAY))
}

/// The set of all Sundays.
pub fn sunday() -> Schedule {
    leaf(Expr::Weekday(Weekday::SUNDAY))
}

/// The set of all days with ISO weekday `number` (1 = Monday,
/// 7 = Sunday).
pub fn weekday(number: u32) -> Result<Schedule, BuildError> {
    Ok(leaf(Expr::Weekday(Weekday::new(number)?)))
}

/// A single day of the month; negative values count from the end
/// (-1 = last day).
pub fn day_of_month(day: i32) -> Result<Schedule, BuildError> {
    Ok(leaf(Expr::DayOfMonth(DayOfMonth::new(day)?)))
}

/// An inclusive run of days of the month.
pub fn day_of_month_range(from: i32, to: i32) -> Result<Schedule, BuildError> {
    Ok(leaf(Expr::DayOfMonth(DayOfMonth::range(from, to)?)))
}

/// The daily half-open window `[start, end)`; wraps through midnight
/// when `start > end`.
pub fn time_range(start: &str, end: &str) -> Result<Schedule, BuildError> {
    Ok(time_range_of(
        parse::time_of_day(start)?,
        parse::time_of_day(end)?,
    ))
}

/// [`time_range`] over already-validated times.
pub fn time_range_of(start: TimeOfDay, end: TimeOfDay) -> Schedule {
    leaf(Expr::TimeRange(TimeRange::new(start, end)))
}

/// A firing every calendar day at the given wall-clock time.
pub fn at(time: &str) -> Result<Schedule, BuildError> {
    Ok(at_time(parse::time_of_day(time)?))
}

/// [`at`] over an already-validated time.
pub fn at_time(time: TimeOfDay) -> Schedule {
    leaf(Expr::At(At::new(time)))
}

/// A firing every `seconds` seconds, anchored at construction time.
pub fn every_seconds(seconds: i64) -> Result<Schedule, BuildError> {
    Ok(leaf(Expr::Every(Every::new(seconds)?)))
}

/// A firing every `minutes` minutes, anchored at construction time.
pub fn every_minutes(minutes: i64) -> Result<Schedule, BuildError> {
    every_seconds(minutes.saturating_mul(60))
}

/// A firing every `hours` hours, anchored at construction time.
pub fn every_hours(hours: i64) -> Result<Schedule, BuildError> {
    every_seconds(hours.saturating_mul(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chime_core::error::ParameterError;
    use chime_model::error::BuildError;

    #[test]
    fn test_weekday_builders_agree() {
        assert_eq!(weekday(1).unwrap(), monday());
        assert_eq!(weekday(7).unwrap(), sunday());
        assert!(matches!(
            weekday(8),
            Err(BuildError::Parameter(ParameterError::WeekdayOutOfRange(8)))
        ));
    }

    #[test]
    fn test_string_builders_report_parse_errors() {
        assert!(matches!(at("25:00"), Err(BuildError::Parse(_))));
        assert!(matches!(
            time_range("8:00", "nonsense"),
            Err(BuildError::Parse(_))
        ));
        assert!(at("8:30").is_ok());
        assert!(time_range("20:00", "10:00").is_ok());
    }

    #[test]
    fn test_day_builders_report_parameter_errors() {
        assert!(matches!(
            day_of_month(0),
            Err(BuildError::Parameter(ParameterError::DayOfMonthOutOfRange(0)))
        ));
        assert!(matches!(
            day_of_month_range(20, 10),
            Err(BuildError::Parameter(ParameterError::DayRangeInverted {
                from: 20,
                to: 10
            }))
        ));
        assert!(day_of_month(-1).is_ok());
        assert!(day_of_month_range(15, -1).is_ok());
    }

    #[test]
    fn test_every_builders_scale_periods() {
        assert!(matches!(
            every_seconds(0),
            Err(BuildError::Parameter(ParameterError::NonPositivePeriod(0)))
        ));
        assert!(matches!(
            every_minutes(-1),
            Err(BuildError::Parameter(ParameterError::NonPositivePeriod(-60)))
        ));
        assert!(every_minutes(15).is_ok());
        assert!(every_hours(1).is_ok());
    }
}
