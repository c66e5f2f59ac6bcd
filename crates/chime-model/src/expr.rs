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

//! The schedule expression tree.
//!
//! Compound nodes are built through [`Expr::and`], [`Expr::or`] and
//! [`Expr::negate`], which enforce the typing discipline and normalise
//! the tree: nested nodes of the same connective are flattened, a unary
//! combination collapses to its operand, and a double negation cancels.
//! Building the enum variants by hand bypasses those checks; the
//! evaluation engine rejects such trees when it encounters them.

use crate::error::TypingError;
use crate::kind::Kind;
use crate::predicate::{At, DayOfMonth, Every, TimeRange, Weekday};
use chrono::{NaiveDateTime, Timelike};
use std::sync::Arc;

/// A node of a schedule expression.
///
/// Children are shared `Arc`s: a sub-expression bound to a variable can
/// participate in any number of larger schedules, so trees are really
/// immutable DAGs. Nodes carry no hidden state and are never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Weekday(Weekday),
    DayOfMonth(DayOfMonth),
    TimeRange(TimeRange),
    At(At),
    Every(Every),
    /// Conjunction. Holds at most one discrete operand (enforced by
    /// [`Expr::and`]); `kind` is discrete exactly when one is present.
    And { operands: Vec<Arc<Expr>>, kind: Kind },
    /// Disjunction. Operands are all continuous or all discrete.
    Or { operands: Vec<Arc<Expr>>, kind: Kind },
    /// Complement of a continuous operand.
    Not(Arc<Expr>),
}

impl Expr {
    /// Builds the conjunction of `operands`.
    ///
    /// Nested conjunctions are flattened first; a single remaining
    /// operand is returned as-is. At most one operand may be discrete:
    /// two discrete sets intersect in isolated coincidences at best, so
    /// the combination is rejected as ill-posed.
    pub fn and(operands: Vec<Arc<Expr>>) -> Result<Arc<Expr>, TypingError> {
        let operands = splice(operands, Connective::And);
        if operands.is_empty() {
            return Err(TypingError::NoOperands);
        }
        if operands.len() == 1 {
            return Ok(operands.into_iter().next().expect("length checked above"));
        }

        let discrete = operands.iter().filter(|op| op.kind().is_discrete()).count();
        let kind = match discrete {
            0 => Kind::Continuous,
            1 => Kind::Discrete,
            _ => return Err(TypingError::AndMultipleDiscrete),
        };
        Ok(Arc::new(Expr::And { operands, kind }))
    }

    /// Builds the disjunction of `operands`.
    ///
    /// Nested disjunctions are flattened first; a single remaining
    /// operand is returned as-is. Operands must all share one kind: the
    /// union of an interval set and an isolated point loses the point's
    /// discreteness, so mixing is rejected.
    pub fn or(operands: Vec<Arc<Expr>>) -> Result<Arc<Expr>, TypingError> {
        let operands = splice(operands, Connective::Or);
        if operands.is_empty() {
            return Err(TypingError::NoOperands);
        }
        if operands.len() == 1 {
            return Ok(operands.into_iter().next().expect("length checked above"));
        }

        let discrete = operands.iter().filter(|op| op.kind().is_discrete()).count();
        let kind = if discrete == 0 {
            Kind::Continuous
        } else if discrete == operands.len() {
            Kind::Discrete
        } else {
            return Err(TypingError::OrMixedKinds);
        };
        Ok(Arc::new(Expr::Or { operands, kind }))
    }

    /// Builds the complement of `operand`.
    ///
    /// Only continuous operands can be complemented; a double negation
    /// returns the inner operand.
    pub fn negate(operand: Arc<Expr>) -> Result<Arc<Expr>, TypingError> {
        if operand.kind().is_discrete() {
            return Err(TypingError::NotDiscrete);
        }
        if let Expr::Not(inner) = operand.as_ref() {
            return Ok(Arc::clone(inner));
        }
        Ok(Arc::new(Expr::Not(operand)))
    }

    /// Returns the typing classification of this node.
    pub fn kind(&self) -> Kind {
        match self {
            Expr::Weekday(_) | Expr::DayOfMonth(_) | Expr::TimeRange(_) | Expr::Not(_) => {
                Kind::Continuous
            }
            Expr::At(_) | Expr::Every(_) => Kind::Discrete,
            Expr::And { kind, .. } | Expr::Or { kind, .. } => *kind,
        }
    }

    /// Returns `true` if instant `t` belongs to the set this expression
    /// denotes.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        match self {
            Expr::Weekday(w) => w.matches(t.date()),
            Expr::DayOfMonth(d) => d.matches(t.date()),
            Expr::TimeRange(r) => r.contains_seconds(t.time().num_seconds_from_midnight()),
            Expr::At(a) => a.matches(t),
            Expr::Every(e) => e.matches(t),
            Expr::And { operands, .. } => operands.iter().all(|op| op.contains(t)),
            Expr::Or { operands, .. } => operands.iter().any(|op| op.contains(t)),
            Expr::Not(inner) => !inner.contains(t),
        }
    }
}

enum Connective {
    And,
    Or,
}

/// Splices operands of the same connective into the new operand list.
/// One level suffices: children were themselves flattened when built.
fn splice(operands: Vec<Arc<Expr>>, connective: Connective) -> Vec<Arc<Expr>> {
    let mut out = Vec::with_capacity(operands.len());
    for op in operands {
        match (&connective, op.as_ref()) {
            (Connective::And, Expr::And { operands, .. })
            | (Connective::Or, Expr::Or { operands, .. }) => {
                out.extend(operands.iter().cloned());
            }
            _ => out.push(op),
        }
    }
    out
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Weekday(w) => write!(f, "{}", w),
            Expr::DayOfMonth(d) => write!(f, "{}", d),
            Expr::TimeRange(r) => write!(f, "{}", r),
            Expr::At(a) => write!(f, "{}", a),
            Expr::Every(e) => write!(f, "{}", e),
            Expr::And { operands, .. } => write_operands(f, operands, " & "),
            Expr::Or { operands, .. } => write_operands(f, operands, " | "),
            Expr::Not(inner) => write!(f, "~{}", inner),
        }
    }
}

fn write_operands(
    f: &mut std::fmt::Formatter<'_>,
    operands: &[Arc<Expr>],
    separator: &str,
) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, op) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", op)?;
    }
    write!(f, ")")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chime_core::time::time_of_day::TimeOfDay;
    use chrono::NaiveDate;

    fn weekday(n: u32) -> Arc<Expr> {
        Arc::new(Expr::Weekday(Weekday::new(n).unwrap()))
    }

    fn at(s: &str) -> Arc<Expr> {
        Arc::new(Expr::At(At::new(s.parse().unwrap())))
    }

    fn every(seconds: i64) -> Arc<Expr> {
        Arc::new(Expr::Every(Every::new(seconds).unwrap()))
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_kind_of_leaves() {
        assert!(weekday(1).kind().is_continuous());
        assert!(at("10").kind().is_discrete());
        assert!(every(60).kind().is_discrete());
    }

    #[test]
    fn test_and_kind_propagation() {
        let continuous = Expr::and(vec![weekday(1), weekday(2)]).unwrap();
        assert!(continuous.kind().is_continuous());

        let gated = Expr::and(vec![weekday(1), at("10")]).unwrap();
        assert!(gated.kind().is_discrete());
    }

    #[test]
    fn test_and_rejects_two_discrete() {
        assert_eq!(
            Expr::and(vec![at("10"), at("12")]),
            Err(TypingError::AndMultipleDiscrete)
        );
        assert_eq!(
            Expr::and(vec![every(60), every(120)]),
            Err(TypingError::AndMultipleDiscrete)
        );
    }

    #[test]
    fn test_or_kind_propagation() {
        assert!(Expr::or(vec![weekday(6), weekday(7)])
            .unwrap()
            .kind()
            .is_continuous());
        assert!(Expr::or(vec![at("10"), at("18")])
            .unwrap()
            .kind()
            .is_discrete());
    }

    #[test]
    fn test_or_rejects_mixed_kinds() {
        assert_eq!(
            Expr::or(vec![weekday(1), every(60)]),
            Err(TypingError::OrMixedKinds)
        );
    }

    #[test]
    fn test_no_operands() {
        assert_eq!(Expr::and(vec![]), Err(TypingError::NoOperands));
        assert_eq!(Expr::or(vec![]), Err(TypingError::NoOperands));
    }

    #[test]
    fn test_unary_collapses_to_operand() {
        let mon = weekday(1);
        let collapsed = Expr::and(vec![Arc::clone(&mon)]).unwrap();
        assert!(Arc::ptr_eq(&collapsed, &mon));
        let collapsed = Expr::or(vec![Arc::clone(&mon)]).unwrap();
        assert!(Arc::ptr_eq(&collapsed, &mon));
    }

    #[test]
    fn test_nested_connectives_flatten() {
        let inner = Expr::or(vec![weekday(2), weekday(3), weekday(4)]).unwrap();
        let outer = Expr::or(vec![weekday(1), inner, weekday(5)]).unwrap();
        match outer.as_ref() {
            Expr::Or { operands, .. } => assert_eq!(operands.len(), 5),
            other => panic!("expected Or, got {:?}", other),
        }

        let inner = Expr::and(vec![weekday(2), weekday(3), weekday(4)]).unwrap();
        let outer = Expr::and(vec![weekday(1), inner, weekday(5)]).unwrap();
        match outer.as_ref() {
            Expr::And { operands, .. } => assert_eq!(operands.len(), 5),
            other => panic!("expected And, got {:?}", other),
        }
    }

    #[test]
    fn test_flattening_preserves_discrete_gate() {
        // (Monday & At 10) & Tuesday splices into one And with a single
        // discrete operand.
        let gated = Expr::and(vec![weekday(1), at("10")]).unwrap();
        let outer = Expr::and(vec![gated, weekday(2)]).unwrap();
        match outer.as_ref() {
            Expr::And { operands, kind } => {
                assert_eq!(operands.len(), 3);
                assert!(kind.is_discrete());
            }
            other => panic!("expected And, got {:?}", other),
        }
    }

    #[test]
    fn test_negate_rejects_discrete() {
        assert_eq!(Expr::negate(at("10")), Err(TypingError::NotDiscrete));
        assert_eq!(Expr::negate(every(60)), Err(TypingError::NotDiscrete));
    }

    #[test]
    fn test_double_negation_cancels() {
        let mon = weekday(1);
        let negated = Expr::negate(Arc::clone(&mon)).unwrap();
        let back = Expr::negate(negated).unwrap();
        assert!(Arc::ptr_eq(&back, &mon));
    }

    #[test]
    fn test_contains_composites() {
        let monday_noon = dt(2024, 1, 1, 12, 0, 0);
        let weekend = Expr::or(vec![weekday(6), weekday(7)]).unwrap();
        assert!(!weekend.contains(monday_noon));

        let weekdays = Expr::negate(weekend).unwrap();
        assert!(weekdays.contains(monday_noon));

        let morning = Arc::new(Expr::TimeRange(TimeRange::new(
            TimeOfDay::new(8, 0, 0).unwrap(),
            TimeOfDay::new(12, 0, 0).unwrap(),
        )));
        let monday_morning = Expr::and(vec![weekday(1), morning]).unwrap();
        assert!(monday_morning.contains(dt(2024, 1, 1, 9, 0, 0)));
        assert!(!monday_morning.contains(monday_noon)); // noon excluded
        assert!(!monday_morning.contains(dt(2024, 1, 2, 9, 0, 0)));
    }

    #[test]
    fn test_display() {
        let sched = Expr::and(vec![weekday(1), at("12")]).unwrap();
        assert_eq!(format!("{}", sched), "(Monday & at 12:00:00)");
    }
}
