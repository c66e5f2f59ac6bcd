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

use crate::discrete::next_firing;
use crate::error::EvalError;
use chime_model::expr::Expr;
use chrono::{Duration, NaiveDateTime};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

/// Default search horizon in days, roughly ten years.
///
/// The horizon guarantees termination for pathological schedules whose
/// continuous gate is effectively empty; it is configuration, not state.
pub const DEFAULT_HORIZON_DAYS: i64 = 3_653;

/// The configured entry point of the engine.
///
/// An `Evaluator` carries the search horizon and an optional interrupt
/// flag. It holds no mutable state; one instance may serve any number of
/// expressions from any number of threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    horizon: Duration,
    interrupt: Option<Arc<AtomicBool>>,
}

impl Default for Evaluator {
    #[inline]
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Evaluator {
    /// Creates a builder with the default horizon and no interrupt flag.
    #[inline]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Returns the configured search horizon.
    #[inline]
    pub fn horizon(&self) -> Duration {
        self.horizon
    }

    /// Returns the smallest firing instant of `expr` at or after `t`.
    ///
    /// Fails with [`EvalError::NotDiscrete`] when `expr` is continuous,
    /// with [`EvalError::NoMatch`] when no firing exists within the
    /// horizon, and with [`EvalError::Interrupted`] when the interrupt
    /// flag was raised mid-search.
    pub fn next(&self, expr: &Expr, t: NaiveDateTime) -> Result<NaiveDateTime, EvalError> {
        if !expr.kind().is_discrete() {
            return Err(EvalError::NotDiscrete);
        }
        let limit = t
            .checked_add_signed(self.horizon)
            .unwrap_or(NaiveDateTime::MAX);
        match next_firing(expr, t, limit, self.interrupt.as_deref())? {
            Some(firing) => Ok(firing),
            None => {
                debug!(
                    from = %t,
                    horizon_days = self.horizon.num_days(),
                    "no firing instant within the search horizon"
                );
                Err(EvalError::NoMatch {
                    from: t,
                    horizon: self.horizon,
                })
            }
        }
    }
}

/// Builder for [`Evaluator`].
#[derive(Debug, Clone)]
pub struct EvaluatorBuilder {
    horizon: Duration,
    interrupt: Option<Arc<AtomicBool>>,
}

impl Default for EvaluatorBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluatorBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            horizon: Duration::days(DEFAULT_HORIZON_DAYS),
            interrupt: None,
        }
    }

    /// Bounds how far ahead of the anchor instant a search may look.
    #[inline]
    pub fn with_horizon(mut self, horizon: Duration) -> Self {
        self.horizon = horizon;
        self
    }

    /// Installs a flag that aborts a running search when set. The flag
    /// is polled between iterations of the gating loop.
    #[inline]
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    #[inline]
    pub fn build(self) -> Evaluator {
        Evaluator {
            horizon: self.horizon,
            interrupt: self.interrupt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chime_core::time::time_of_day::TimeOfDay;
    use chime_model::predicate::{At, Every, TimeRange, Weekday};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::atomic::Ordering;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn at(s: &str) -> Arc<Expr> {
        Arc::new(Expr::At(At::new(s.parse().unwrap())))
    }

    fn weekday(n: u32) -> Arc<Expr> {
        Arc::new(Expr::Weekday(Weekday::new(n).unwrap()))
    }

    #[test]
    fn test_rejects_continuous_root() {
        let evaluator = Evaluator::default();
        let result = evaluator.next(&weekday(1), dt(2024, 1, 1, 0, 0, 0));
        assert_eq!(result, Err(EvalError::NotDiscrete));
    }

    #[test]
    fn test_no_match_within_horizon() {
        // An empty time range gates everything away.
        let empty = Arc::new(Expr::TimeRange(TimeRange::new(
            "10:00".parse::<TimeOfDay>().unwrap(),
            "10:00".parse::<TimeOfDay>().unwrap(),
        )));
        let sched = Expr::and(vec![empty, at("12")]).unwrap();

        let evaluator = Evaluator::default();
        let from = dt(2024, 1, 1, 0, 0, 0);
        match evaluator.next(&sched, from) {
            Err(EvalError::NoMatch { from: reported, .. }) => assert_eq!(reported, from),
            other => panic!("expected NoMatch, got {:?}", other),
        }
    }

    #[test]
    fn test_short_horizon_cuts_search() {
        // Monday & at 12 from a Tuesday: the firing is six days out,
        // beyond a one-day horizon.
        let sched = Expr::and(vec![weekday(1), at("12")]).unwrap();
        let evaluator = Evaluator::builder()
            .with_horizon(Duration::days(1))
            .build();
        assert!(matches!(
            evaluator.next(&sched, dt(2024, 1, 2, 0, 0, 0)),
            Err(EvalError::NoMatch { .. })
        ));

        // The default horizon finds it.
        assert_eq!(
            Evaluator::default().next(&sched, dt(2024, 1, 2, 0, 0, 0)),
            Ok(dt(2024, 1, 8, 12, 0, 0))
        );
    }

    #[test]
    fn test_interrupt_flag_aborts() {
        let flag = Arc::new(AtomicBool::new(false));
        let evaluator = Evaluator::builder()
            .with_interrupt(Arc::clone(&flag))
            .build();
        let sched = Expr::and(vec![weekday(1), at("12")]).unwrap();

        // Unset flag: evaluation proceeds normally.
        assert!(evaluator.next(&sched, dt(2024, 1, 1, 0, 0, 0)).is_ok());

        flag.store(true, Ordering::Relaxed);
        assert_eq!(
            evaluator.next(&sched, dt(2024, 1, 1, 0, 0, 0)),
            Err(EvalError::Interrupted)
        );
    }

    #[test]
    fn test_monotonicity_over_random_anchors() {
        // For t1 <= t2, next(t1) <= next(t2).
        let sched = Expr::and(vec![
            Expr::or(vec![weekday(6), weekday(7)]).unwrap(),
            Expr::or(vec![at("10:00"), at("18:00")]).unwrap(),
        ])
        .unwrap();
        let evaluator = Evaluator::default();
        let base = dt(2024, 1, 1, 0, 0, 0);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let a = base + Duration::seconds(rng.gen_range(0..30 * 86_400));
            let b = a + Duration::seconds(rng.gen_range(0..7 * 86_400));
            let fire_a = evaluator.next(&sched, a).unwrap();
            let fire_b = evaluator.next(&sched, b).unwrap();
            assert!(fire_a >= a);
            assert!(fire_b >= b);
            assert!(fire_a <= fire_b);
        }
    }

    #[test]
    fn test_idempotence_at_firings() {
        // next(next(t)) == next(t), and firings are members.
        let grid = Arc::new(Expr::Every(
            Every::new(420)
                .unwrap()
                .with_anchor(dt(2024, 1, 1, 0, 1, 23)),
        ));
        let sched = Expr::and(vec![weekday(3), grid]).unwrap();
        let evaluator = Evaluator::default();

        let mut rng = StdRng::seed_from_u64(7);
        let base = dt(2024, 1, 1, 0, 0, 0);
        for _ in 0..100 {
            let t = base + Duration::seconds(rng.gen_range(0..60 * 86_400));
            let fire = evaluator.next(&sched, t).unwrap();
            assert!(sched.contains(fire));
            assert_eq!(evaluator.next(&sched, fire), Ok(fire));
        }
    }
}
