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

use chime_engine::error::EvalError;
use chime_engine::evaluator::Evaluator;
use chime_model::error::TypingError;
use chime_model::expr::Expr;
use chime_model::kind::Kind;
use chrono::{Duration, NaiveDateTime};
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

/// A handle to an immutable schedule expression.
///
/// Cloning is cheap and shares the underlying tree, so sub-expressions
/// can be bound to variables and reused across schedules. Schedules are
/// combined with the bitwise operators `&`, `|` and `!`, which panic on
/// ill-typed combinations; the `try_*` methods are the fallible forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    expr: Arc<Expr>,
}

impl Schedule {
    pub(crate) fn from_expr(expr: Arc<Expr>) -> Self {
        Self { expr }
    }

    /// Returns the underlying expression, for use with a hand-configured
    /// [`Evaluator`].
    #[inline]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Returns the typing classification of this schedule.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.expr.kind()
    }

    /// Returns `true` if instant `t` belongs to the set this schedule
    /// denotes.
    #[inline]
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.expr.contains(t)
    }

    /// The conjunction of `self` and `other`.
    pub fn try_and(&self, other: &Schedule) -> Result<Schedule, TypingError> {
        Expr::and(vec![Arc::clone(&self.expr), Arc::clone(&other.expr)]).map(Self::from_expr)
    }

    /// The disjunction of `self` and `other`.
    pub fn try_or(&self, other: &Schedule) -> Result<Schedule, TypingError> {
        Expr::or(vec![Arc::clone(&self.expr), Arc::clone(&other.expr)]).map(Self::from_expr)
    }

    /// The complement of `self`.
    pub fn try_not(&self) -> Result<Schedule, TypingError> {
        Expr::negate(Arc::clone(&self.expr)).map(Self::from_expr)
    }

    /// Returns the smallest firing instant at or after `t`, searching
    /// with the default evaluator.
    pub fn next(&self, t: NaiveDateTime) -> Result<NaiveDateTime, EvalError> {
        Evaluator::default().next(&self.expr, t)
    }

    /// Like [`Schedule::next`], with a caller-configured evaluator
    /// (custom horizon, interrupt flag).
    pub fn next_with(
        &self,
        evaluator: &Evaluator,
        t: NaiveDateTime,
    ) -> Result<NaiveDateTime, EvalError> {
        evaluator.next(&self.expr, t)
    }

    /// Collects up to `n` firing instants starting at `from`. Stops
    /// early when no further firing exists within the horizon.
    pub fn next_n(&self, from: NaiveDateTime, n: usize) -> Vec<NaiveDateTime> {
        self.upcoming(from).take(n).collect()
    }

    /// Returns an iterator over the firing instants at or after `from`.
    ///
    /// The iterator ends when no further firing exists within the
    /// search horizon of the default evaluator.
    pub fn upcoming(&self, from: NaiveDateTime) -> Upcoming {
        Upcoming {
            schedule: self.clone(),
            evaluator: Evaluator::default(),
            cursor: Some(from),
        }
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expr)
    }
}

impl BitAnd for Schedule {
    type Output = Schedule;

    /// # Panics
    ///
    /// Panics if both operands are discrete. Use [`Schedule::try_and`]
    /// to handle the error instead.
    fn bitand(self, rhs: Schedule) -> Schedule {
        match self.try_and(&rhs) {
            Ok(schedule) => schedule,
            Err(e) => panic!("invalid schedule combination: {}", e),
        }
    }
}

impl BitOr for Schedule {
    type Output = Schedule;

    /// # Panics
    ///
    /// Panics if the operands mix continuous and discrete kinds. Use
    /// [`Schedule::try_or`] to handle the error instead.
    fn bitor(self, rhs: Schedule) -> Schedule {
        match self.try_or(&rhs) {
            Ok(schedule) => schedule,
            Err(e) => panic!("invalid schedule combination: {}", e),
        }
    }
}

impl Not for Schedule {
    type Output = Schedule;

    /// # Panics
    ///
    /// Panics if the operand is discrete. Use [`Schedule::try_not`] to
    /// handle the error instead.
    fn not(self) -> Schedule {
        match self.try_not() {
            Ok(schedule) => schedule,
            Err(e) => panic!("invalid schedule combination: {}", e),
        }
    }
}

/// Iterator over the firing instants of a schedule, earliest first.
///
/// Produced by [`Schedule::upcoming`]. Each step resumes one second
/// past the previous firing.
#[derive(Debug, Clone)]
pub struct Upcoming {
    schedule: Schedule,
    evaluator: Evaluator,
    cursor: Option<NaiveDateTime>,
}

impl Iterator for Upcoming {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor?;
        match self.schedule.next_with(&self.evaluator, cursor) {
            Ok(firing) => {
                self.cursor = firing.checked_add_signed(Duration::seconds(1));
                Some(firing)
            }
            Err(_) => {
                self.cursor = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{at, every_seconds, monday, saturday, sunday};
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_operators_build_composites() {
        let weekend = saturday() | sunday();
        assert!(weekend.kind().is_continuous());

        let weekdays = !weekend.clone();
        assert!(weekdays.kind().is_continuous());

        let gated = weekend & at("10:00").unwrap();
        assert!(gated.kind().is_discrete());
    }

    #[test]
    #[should_panic(expected = "invalid schedule combination")]
    fn test_and_operator_panics_on_two_discrete() {
        let _ = at("10").unwrap() & at("12").unwrap();
    }

    #[test]
    #[should_panic(expected = "invalid schedule combination")]
    fn test_or_operator_panics_on_mixed_kinds() {
        let _ = monday() | at("12").unwrap();
    }

    #[test]
    #[should_panic(expected = "invalid schedule combination")]
    fn test_not_operator_panics_on_discrete() {
        let _ = !at("10").unwrap();
    }

    #[test]
    fn test_try_forms_report_errors() {
        let a = at("10").unwrap();
        let b = at("12").unwrap();
        assert_eq!(a.try_and(&b), Err(TypingError::AndMultipleDiscrete));
        assert_eq!(monday().try_or(&a), Err(TypingError::OrMixedKinds));
        assert_eq!(a.try_not(), Err(TypingError::NotDiscrete));
    }

    #[test]
    fn test_next_n_collects_firings() {
        let sched = monday() & at("12").unwrap();
        let firings = sched.next_n(dt(2024, 1, 1, 0, 0, 0), 3);
        assert_eq!(
            firings,
            vec![
                dt(2024, 1, 1, 12, 0, 0),
                dt(2024, 1, 8, 12, 0, 0),
                dt(2024, 1, 15, 12, 0, 0),
            ]
        );
    }

    #[test]
    fn test_upcoming_is_strictly_increasing() {
        let sched = every_seconds(3).unwrap();
        let firings: Vec<_> = sched.upcoming(dt(2024, 1, 1, 0, 0, 0)).take(5).collect();
        assert_eq!(firings.len(), 5);
        for pair in firings.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::seconds(3));
        }
    }

    #[test]
    fn test_next_n_stops_when_nothing_matches() {
        use crate::builders::time_range;
        let sched = time_range("10:00", "10:00").unwrap() & at("12").unwrap();
        assert!(sched.next_n(dt(2024, 1, 1, 0, 0, 0), 3).is_empty());
    }

    #[test]
    fn test_display_renders_algebra() {
        let sched = monday() & at("12").unwrap();
        assert_eq!(format!("{}", sched), "(Monday & at 12:00:00)");
    }
}
