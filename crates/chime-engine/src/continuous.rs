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

//! The continuous evaluator.
//!
//! A continuous expression denotes a union of half-open time intervals.
//! Its membership value is piecewise constant, so the whole timeline can
//! be swept boundary to boundary: [`next_boundary`] finds the first
//! instant strictly after `t` at which membership flips, and
//! [`next_entry`] iterates that to the first instant at or after `t`
//! inside the set. Nothing here ever steps second by second; the worst
//! granularity is one midnight per calendar day.

use chime_core::time::calendar;
use chime_model::expr::Expr;
use chime_model::predicate::{DayOfMonth, TimeRange, Weekday};
use chrono::{Datelike, Days, Duration, NaiveDateTime, Timelike};
use std::sync::Arc;

/// A membership change of a continuous expression: at `at`, the value
/// becomes `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub at: NaiveDateTime,
    pub value: bool,
}

/// Returns the first membership flip strictly after `t`, or `None` if
/// membership is constant through `limit`.
pub fn next_boundary(expr: &Expr, t: NaiveDateTime, limit: NaiveDateTime) -> Option<Boundary> {
    let boundary = match expr {
        Expr::Weekday(w) => weekday_boundary(w, t),
        Expr::DayOfMonth(d) => day_of_month_boundary(d, t, limit),
        Expr::TimeRange(r) => time_range_boundary(r, t),
        Expr::Not(inner) => next_boundary(inner, t, limit).map(|b| Boundary {
            at: b.at,
            value: !b.value,
        }),
        Expr::And { operands, .. } | Expr::Or { operands, .. } => {
            composite_boundary(expr, operands, t, limit)
        }
        Expr::At(_) | Expr::Every(_) => {
            debug_assert!(false, "boundary queries apply to continuous expressions");
            None
        }
    };
    boundary.filter(|b| b.at <= limit)
}

/// Returns the smallest instant s >= `t` with `expr.contains(s)`, or
/// `None` if the set stays empty through `limit`.
pub fn next_entry(expr: &Expr, t: NaiveDateTime, limit: NaiveDateTime) -> Option<NaiveDateTime> {
    if expr.contains(t) {
        return Some(t);
    }
    let boundary = next_boundary(expr, t, limit)?;
    debug_assert!(
        boundary.value,
        "the first flip seen from outside the set must enter it"
    );
    Some(boundary.at)
}

/// Sweeps the maximal matching intervals of a continuous expression
/// whose start lies in `[t, limit)`, earliest first, as half-open
/// `(start, end)` pairs. An interval still open at the limit is
/// truncated to it.
pub fn intervals(expr: &Expr, t: NaiveDateTime, limit: NaiveDateTime) -> Intervals<'_> {
    Intervals {
        expr,
        cursor: Some(t),
        limit,
    }
}

/// Iterator produced by [`intervals`].
#[derive(Debug, Clone)]
pub struct Intervals<'a> {
    expr: &'a Expr,
    cursor: Option<NaiveDateTime>,
    limit: NaiveDateTime,
}

impl Iterator for Intervals<'_> {
    type Item = (NaiveDateTime, NaiveDateTime);

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor?;
        let Some(start) = next_entry(self.expr, cursor, self.limit) else {
            self.cursor = None;
            return None;
        };
        if start >= self.limit {
            self.cursor = None;
            return None;
        }
        match next_boundary(self.expr, start, self.limit) {
            Some(boundary) => {
                debug_assert!(!boundary.value, "the flip after an entry must leave the set");
                self.cursor = Some(boundary.at);
                Some((start, boundary.at))
            }
            None => {
                // Still inside the set at the limit.
                self.cursor = None;
                Some((start, self.limit))
            }
        }
    }
}

/// [`next_entry`] over the conjunction of several gates, without
/// materialising an `And` node. Used by the discrete evaluator, which
/// folds all continuous factors of a conjunction into one gate.
pub fn next_entry_conjunction(
    gates: &[&Arc<Expr>],
    t: NaiveDateTime,
    limit: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let mut cursor = t;
    'sweep: loop {
        for gate in gates {
            if !gate.contains(cursor) {
                // Entering this gate may have left another; sweep again.
                cursor = next_entry(gate, cursor, limit)?;
                continue 'sweep;
            }
        }
        return Some(cursor);
    }
}

/// A weekday flips at midnights only: leaving the day at the next
/// midnight when inside, entering at the start of the next matching
/// date when outside.
fn weekday_boundary(w: &Weekday, t: NaiveDateTime) -> Option<Boundary> {
    let today = t.date();
    if w.matches(today) {
        calendar::day_after(today).map(|date| Boundary {
            at: calendar::midnight(date),
            value: false,
        })
    } else {
        let ahead = w.days_until(today) as u64;
        let date = today.checked_add_days(Days::new(ahead))?;
        Some(Boundary {
            at: calendar::midnight(date),
            value: true,
        })
    }
}

/// Day-of-month membership also flips at midnights. The scan walks day
/// by day but jumps over months whose resolved day set is empty, so a
/// predicate like `day 31` crosses February in one step.
fn day_of_month_boundary(
    d: &DayOfMonth,
    t: NaiveDateTime,
    limit: NaiveDateTime,
) -> Option<Boundary> {
    let current = d.matches(t.date());
    let mut date = calendar::day_after(t.date())?;
    loop {
        let at = calendar::midnight(date);
        if at > limit {
            return None;
        }
        if d.matches(date) != current {
            return Some(Boundary { at, value: !current });
        }
        date = if !current && d.resolved_days(date.year(), date.month()).is_none() {
            calendar::first_of_next_month(date)?
        } else {
            calendar::day_after(date)?
        };
    }
}

/// A time range flips twice per day: membership begins at `start` and
/// ends at `end`, wrapping through midnight when `start > end`. The
/// empty range never flips.
fn time_range_boundary(r: &TimeRange, t: NaiveDateTime) -> Option<Boundary> {
    if r.is_empty() {
        return None;
    }
    let seconds = t.time().num_seconds_from_midnight();
    let edges = [
        (r.start().seconds_in_day(), true),
        (r.end().seconds_in_day(), false),
    ];
    edges
        .iter()
        .filter_map(|&(edge, value)| {
            let date = if edge > seconds {
                t.date()
            } else {
                calendar::day_after(t.date())?
            };
            let at = calendar::midnight(date)
                .checked_add_signed(Duration::seconds(edge as i64))?;
            Some(Boundary { at, value })
        })
        .min_by_key(|b| b.at)
}

/// Boundaries of a compound node: take the earliest child flip, then
/// check whether the compound value actually changed there. A child can
/// flip without changing a conjunction or disjunction; such candidates
/// are skipped and the scan continues from them.
fn composite_boundary(
    expr: &Expr,
    operands: &[Arc<Expr>],
    t: NaiveDateTime,
    limit: NaiveDateTime,
) -> Option<Boundary> {
    let reference = expr.contains(t);
    let mut cursor = t;
    loop {
        let candidate = operands
            .iter()
            .filter_map(|op| next_boundary(op, cursor, limit))
            .min_by_key(|b| b.at)?;
        let value = expr.contains(candidate.at);
        if value != reference {
            return Some(Boundary {
                at: candidate.at,
                value,
            });
        }
        cursor = candidate.at;
    }
}
