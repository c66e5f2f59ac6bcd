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

//! The discrete evaluator.
//!
//! Finds the smallest firing instant at or after an anchor. Discrete
//! leaves answer directly, a disjunction takes the earliest child
//! firing, and a gated conjunction runs the skip loop: ask the discrete
//! operand for a candidate, test it against the continuous gates, and on
//! rejection jump the cursor to the next instant at which all gates hold
//! — whole off-intervals of the gates are crossed in one step.

use crate::continuous::next_entry_conjunction;
use crate::error::EvalError;
use chime_model::expr::Expr;
use chrono::NaiveDateTime;
use smallvec::SmallVec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Returns the smallest firing instant of `expr` in `[t, limit]`, or
/// `Ok(None)` when there is none.
///
/// `expr` must come out of the model constructors; hand-built trees that
/// violate the typing discipline are rejected with
/// [`EvalError::NotDiscrete`].
pub fn next_firing(
    expr: &Expr,
    t: NaiveDateTime,
    limit: NaiveDateTime,
    interrupt: Option<&AtomicBool>,
) -> Result<Option<NaiveDateTime>, EvalError> {
    match expr {
        Expr::At(at) => Ok(at.next_firing(t).filter(|s| *s <= limit)),
        Expr::Every(every) => Ok(every.next_firing(t).filter(|s| *s <= limit)),
        Expr::Or { operands, .. } => {
            // The earliest child firing; coinciding firings collapse.
            let mut best: Option<NaiveDateTime> = None;
            for op in operands {
                if let Some(s) = next_firing(op, t, limit, interrupt)? {
                    best = Some(best.map_or(s, |b| b.min(s)));
                }
            }
            Ok(best)
        }
        Expr::And { operands, .. } => gated_firing(operands, t, limit, interrupt),
        Expr::Weekday(_) | Expr::DayOfMonth(_) | Expr::TimeRange(_) | Expr::Not(_) => {
            Err(EvalError::NotDiscrete)
        }
    }
}

/// The gating loop over a conjunction with exactly one discrete operand.
fn gated_firing(
    operands: &[Arc<Expr>],
    t: NaiveDateTime,
    limit: NaiveDateTime,
    interrupt: Option<&AtomicBool>,
) -> Result<Option<NaiveDateTime>, EvalError> {
    let mut gates: SmallVec<[&Arc<Expr>; 4]> = SmallVec::new();
    let mut firing: Option<&Arc<Expr>> = None;
    for op in operands {
        if op.kind().is_discrete() {
            // The constructors admit at most one discrete operand.
            firing = Some(op);
        } else {
            gates.push(op);
        }
    }
    let Some(firing) = firing else {
        return Err(EvalError::NotDiscrete);
    };

    let mut cursor = t;
    loop {
        if let Some(flag) = interrupt {
            if flag.load(Ordering::Relaxed) {
                return Err(EvalError::Interrupted);
            }
        }

        let Some(candidate) = next_firing(firing, cursor, limit, interrupt)? else {
            return Ok(None);
        };
        if gates.iter().all(|gate| gate.contains(candidate)) {
            return Ok(Some(candidate));
        }

        trace!(candidate = %candidate, "candidate rejected by continuous gate, skipping ahead");
        let Some(entry) = next_entry_conjunction(&gates, candidate, limit) else {
            return Ok(None);
        };
        cursor = entry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chime_core::time::time_of_day::TimeOfDay;
    use chime_model::predicate::{At, DayOfMonth, Every, TimeRange, Weekday};
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn far_limit() -> NaiveDateTime {
        dt(2100, 1, 1, 0, 0, 0)
    }

    fn at(s: &str) -> Arc<Expr> {
        Arc::new(Expr::At(At::new(s.parse().unwrap())))
    }

    fn weekday(n: u32) -> Arc<Expr> {
        Arc::new(Expr::Weekday(Weekday::new(n).unwrap()))
    }

    fn fire(expr: &Expr, t: NaiveDateTime) -> Option<NaiveDateTime> {
        next_firing(expr, t, far_limit(), None).unwrap()
    }

    #[test]
    fn test_or_takes_earliest_firing() {
        let sched = Expr::or(vec![at("18:00"), at("10:00")]).unwrap();
        assert_eq!(
            fire(&sched, dt(2024, 1, 1, 0, 0, 0)),
            Some(dt(2024, 1, 1, 10, 0, 0))
        );
        assert_eq!(
            fire(&sched, dt(2024, 1, 1, 10, 0, 1)),
            Some(dt(2024, 1, 1, 18, 0, 0))
        );
    }

    #[test]
    fn test_or_collapses_coinciding_firings() {
        let sched = Expr::or(vec![at("10:00"), at("10:00")]).unwrap();
        assert_eq!(
            fire(&sched, dt(2024, 1, 1, 0, 0, 0)),
            Some(dt(2024, 1, 1, 10, 0, 0))
        );
    }

    #[test]
    fn test_gated_firing_accepts_candidate_in_gate() {
        // Monday & at 12: Monday noon fires immediately.
        let sched = Expr::and(vec![weekday(1), at("12")]).unwrap();
        let noon = dt(2024, 1, 1, 12, 0, 0);
        assert_eq!(fire(&sched, noon), Some(noon));
    }

    #[test]
    fn test_gated_firing_skips_to_next_gate_window() {
        // One second past Monday noon: the next firing is a week away.
        let sched = Expr::and(vec![weekday(1), at("12")]).unwrap();
        assert_eq!(
            fire(&sched, dt(2024, 1, 1, 12, 0, 1)),
            Some(dt(2024, 1, 8, 12, 0, 0))
        );
    }

    #[test]
    fn test_gated_firing_with_grid() {
        // A 15-minute grid gated to [8:00, 20:00).
        let window = Arc::new(Expr::TimeRange(TimeRange::new(
            "8:00".parse::<TimeOfDay>().unwrap(),
            "20:00".parse::<TimeOfDay>().unwrap(),
        )));
        let grid = Arc::new(Expr::Every(
            Every::new(900)
                .unwrap()
                .with_anchor(dt(2024, 1, 1, 0, 5, 0)),
        ));
        let sched = Expr::and(vec![window, grid]).unwrap();

        // From 07:30 the first grid point inside the window is 08:05.
        assert_eq!(
            fire(&sched, dt(2024, 1, 1, 7, 30, 0)),
            Some(dt(2024, 1, 1, 8, 5, 0))
        );
        // The last firing of the day lies before 20:00; the next one is
        // the following morning.
        assert_eq!(
            fire(&sched, dt(2024, 1, 1, 19, 50, 1)),
            Some(dt(2024, 1, 2, 8, 5, 0))
        );
    }

    #[test]
    fn test_gated_firing_empty_gate_yields_none() {
        let empty = Arc::new(Expr::TimeRange(TimeRange::new(
            "10:00".parse::<TimeOfDay>().unwrap(),
            "10:00".parse::<TimeOfDay>().unwrap(),
        )));
        let sched = Expr::and(vec![empty, at("12")]).unwrap();
        assert_eq!(fire(&sched, dt(2024, 1, 1, 0, 0, 0)), None);
    }

    #[test]
    fn test_gated_firing_monthly() {
        // (day 15 | last day) & at 12, through a leap February.
        let days = Expr::or(vec![
            Arc::new(Expr::DayOfMonth(DayOfMonth::new(15).unwrap())),
            Arc::new(Expr::DayOfMonth(DayOfMonth::new(-1).unwrap())),
        ])
        .unwrap();
        let sched = Expr::and(vec![days, at("12")]).unwrap();

        let first = fire(&sched, dt(2024, 2, 10, 0, 0, 0)).unwrap();
        assert_eq!(first, dt(2024, 2, 15, 12, 0, 0));
        let second = fire(&sched, first + chrono::Duration::seconds(1)).unwrap();
        assert_eq!(second, dt(2024, 2, 29, 12, 0, 0));
        let third = fire(&sched, second + chrono::Duration::seconds(1)).unwrap();
        assert_eq!(third, dt(2024, 3, 15, 12, 0, 0));
    }

    #[test]
    fn test_interrupt_aborts_gated_search() {
        let flag = AtomicBool::new(true);
        let sched = Expr::and(vec![weekday(1), at("12")]).unwrap();
        let result = next_firing(&sched, dt(2024, 1, 1, 0, 0, 0), far_limit(), Some(&flag));
        assert_eq!(result, Err(EvalError::Interrupted));
    }

    #[test]
    fn test_continuous_root_is_rejected() {
        let result = next_firing(&weekday(1), dt(2024, 1, 1, 0, 0, 0), far_limit(), None);
        assert_eq!(result, Err(EvalError::NotDiscrete));
    }
}
