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

//! # Chime
//!
//! **A composable scheduler expressed as a boolean algebra over time.**
//!
//! Instead of a cron line, a schedule is an expression: primitive time
//! predicates combined with `&`, `|` and `!`. Continuous predicates
//! describe stretches of time ("it is Monday", "between 08:00 and
//! 20:00"); discrete predicates describe firing instants ("at 12:00",
//! "every 7 minutes" — and every 7 minutes really is every 7 minutes,
//! the grid never snaps to an hour boundary). Asking a schedule for
//! [`Schedule::next`] yields the next firing instant at or after a given
//! instant, jumping over whole dead stretches rather than ticking
//! through them.
//!
//! ```rust
//! use chime::{at, monday, parse_instant};
//!
//! let schedule = monday() & at("12").unwrap();
//!
//! let noon = parse_instant("2024-01-01 12:00:00").unwrap();
//! assert_eq!(schedule.next(noon).unwrap(), noon);
//!
//! let later = parse_instant("2024-01-01 12:00:01").unwrap();
//! assert_eq!(
//!     schedule.next(later).unwrap(),
//!     parse_instant("2024-01-08 12:00:00").unwrap()
//! );
//! ```
//!
//! Sub-expressions are cheap to clone and share structure, so they can
//! be named and reused:
//!
//! ```rust
//! use chime::{at, saturday, sunday};
//!
//! let weekend = saturday() | sunday();
//! let weekdays = !weekend.clone();
//!
//! let brunch = weekend & at("11:00").unwrap();
//! let standup = weekdays & at("09:15").unwrap();
//! # let _ = (brunch, standup);
//! ```
//!
//! Ill-typed combinations — two discrete schedules under `&`, mixed
//! kinds under `|`, `!` of a discrete schedule — are rejected when the
//! expression is built. The operators panic on such misuse; the
//! `try_and` / `try_or` / `try_not` methods report a
//! [`TypingError`] instead.

pub mod builders;
pub mod schedule;

pub use builders::{
    at, at_time, day_of_month, day_of_month_range, every_hours, every_minutes, every_seconds,
    friday, monday, saturday, sunday, thursday, time_range, time_range_of, tuesday, wednesday,
    weekday,
};
pub use schedule::{Schedule, Upcoming};

pub use chime_core::error::ParameterError;
pub use chime_core::time::parse::instant as parse_instant;
pub use chime_core::time::parse::ParseError;
pub use chime_core::time::time_of_day::TimeOfDay;
pub use chime_engine::error::EvalError;
pub use chime_engine::evaluator::{Evaluator, EvaluatorBuilder, DEFAULT_HORIZON_DAYS};
pub use chime_model::error::{BuildError, TypingError};
pub use chime_model::expr::Expr;
pub use chime_model::kind::Kind;
