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

//! # Chime Core
//!
//! Foundational vocabulary for the Chime scheduling algebra. This crate
//! consolidates the small, reusable building blocks that the model and
//! engine crates are written against.
//!
//! ## Modules
//!
//! - `math`: Half-open integer spans `[start, end)` with validation and
//!   the handful of set queries the scheduling domain needs.
//! - `num`: Euclidean division helpers for laying out periodic grids.
//! - `time`: Civil time primitives — `TimeOfDay`, calendar arithmetic on a
//!   strict 86 400-seconds-per-day timeline, and the string input adapters.
//! - `error`: Out-of-range parameter errors shared across the workspace.
//!
//! Everything here is plain data plus pure functions; there is no state
//! and no I/O.

pub mod error;
pub mod math;
pub mod num;
pub mod time;
