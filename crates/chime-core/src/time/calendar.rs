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

//! Calendar arithmetic on a strict 86 400-seconds-per-day timeline.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Seconds per calendar day. Leap seconds do not exist on this timeline.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Returns `true` if the given year has 366 days.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month.
///
/// `month` must be in `1..=12`.
#[inline]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month must be 1-12");
    const MDAYS: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MDAYS[month as usize]
    }
}

/// Returns the ISO weekday number of a date: 1 is Monday, 7 is Sunday.
#[inline]
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Returns the first instant of the given date.
#[inline]
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Returns the date following `date`, or `None` at the end of the
/// supported calendar.
#[inline]
pub fn day_after(date: NaiveDate) -> Option<NaiveDate> {
    date.succ_opt()
}

/// Returns the first day of the month following the one `date` lies in.
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Projects an instant onto the linear second count of the timeline.
///
/// The projection exists for grid arithmetic; it is not a timezone
/// conversion.
#[inline]
pub fn to_epoch_seconds(t: NaiveDateTime) -> i64 {
    t.and_utc().timestamp()
}

/// Inverse of [`to_epoch_seconds`]. `None` when the second count falls
/// outside the supported calendar.
#[inline]
pub fn from_epoch_seconds(seconds: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.naive_utc())
}
