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

use chrono::{Duration, NaiveDateTime};

/// The error type for schedule evaluation.
///
/// Construction problems are caught by the model crate; everything here
/// can only surface when `next` runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// `next` was called on an expression that is not discrete.
    NotDiscrete,
    /// No firing instant exists within the search horizon.
    NoMatch {
        /// The anchor instant the search started from.
        from: NaiveDateTime,
        /// The horizon the search was bounded by.
        horizon: Duration,
    },
    /// Evaluation was aborted through the interrupt flag.
    Interrupted,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotDiscrete => write!(f, "schedule is not discrete"),
            Self::NoMatch { from, horizon } => write!(
                f,
                "no firing instant within {} days of {}",
                horizon.num_days(),
                from
            ),
            Self::Interrupted => write!(f, "evaluation interrupted"),
        }
    }
}

impl std::error::Error for EvalError {}
