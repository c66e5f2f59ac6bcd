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

/// The typing classification of a schedule expression.
///
/// A *continuous* expression denotes a union of half-open time intervals;
/// a *discrete* one denotes isolated firing instants. Only discrete
/// expressions can be asked for their next firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Continuous,
    Discrete,
}

impl Kind {
    /// Returns `true` for [`Kind::Continuous`].
    #[inline]
    pub const fn is_continuous(&self) -> bool {
        matches!(self, Kind::Continuous)
    }

    /// Returns `true` for [`Kind::Discrete`].
    #[inline]
    pub const fn is_discrete(&self) -> bool {
        matches!(self, Kind::Discrete)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Continuous => write!(f, "continuous"),
            Kind::Discrete => write!(f, "discrete"),
        }
    }
}
