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

//! # Chime Engine
//!
//! The evaluation engine of the Chime scheduling algebra: given an
//! expression tree from `chime-model` and an anchor instant, find the
//! next firing instant.
//!
//! The engine never ticks second by second. Continuous sub-expressions
//! are swept boundary to boundary (`continuous`), and the discrete
//! evaluator (`discrete`) jumps a firing candidate over whole dead
//! intervals of its continuous gates. A bounded search horizon
//! guarantees termination for schedules that are effectively empty; the
//! [`evaluator::Evaluator`] carries that horizon and an optional
//! interrupt flag.
//!
//! Evaluation is purely functional: no locks, no mutation of the tree,
//! safe to call concurrently from any number of threads.

pub mod continuous;
pub mod discrete;
pub mod error;
pub mod evaluator;
