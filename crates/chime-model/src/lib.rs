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

//! # Chime Model
//!
//! **The expression tree of the Chime scheduling algebra.**
//!
//! A schedule is a boolean combination of primitive time predicates. This
//! crate defines the predicates, the compound nodes that combine them, and
//! the typing discipline that separates *continuous* predicates (sets of
//! time intervals, such as "it is Monday") from *discrete* ones (isolated
//! firing instants, such as "12:00 sharp").
//!
//! ## Architecture
//!
//! * **`predicate`**: The leaf nodes — `Weekday`, `DayOfMonth`,
//!   `TimeRange` (continuous) and `At`, `Every` (discrete) — each carrying
//!   its validated parameters and its membership semantics.
//! * **`expr`**: The tagged `Expr` tree with `And`, `Or` and `Not`
//!   combinators. Children are shared `Arc`s, so reused sub-expressions
//!   form an immutable DAG.
//! * **`kind`**: The continuous/discrete classification.
//! * **`error`**: Typing violations and the combined construction error.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-Fast**: Every ill-typed combination (two discrete operands
//!    under `&`, mixed kinds under `|`, `!` of a discrete node) is
//!    rejected when the node is built, never at evaluation time.
//! 2. **Immutability**: Nodes are frozen after construction and carry no
//!    hidden state, so trees can be shared freely across threads.
//! 3. **Declarative Semantics**: The model answers "does instant t belong
//!    to this set"; *finding* the next member is the engine crate's job.

pub mod error;
pub mod expr;
pub mod kind;
pub mod predicate;
