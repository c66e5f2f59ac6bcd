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

use chime_core::error::ParameterError;
use chime_core::time::parse::ParseError;

/// An ill-typed combination of schedule expressions.
///
/// Detected eagerly by the compound constructors, never deferred to
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingError {
    /// `And`/`Or` built with an empty operand list.
    NoOperands,
    /// `And` over more than one discrete operand.
    AndMultipleDiscrete,
    /// `Or` mixing continuous and discrete operands.
    OrMixedKinds,
    /// `Not` applied to a discrete operand.
    NotDiscrete,
}

impl std::fmt::Display for TypingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOperands => write!(f, "combinators require at least one operand"),
            Self::AndMultipleDiscrete => {
                write!(f, "cannot combine discrete schedules with &")
            }
            Self::OrMixedKinds => {
                write!(f, "cannot combine discrete and continuous schedules with |")
            }
            Self::NotDiscrete => write!(f, "cannot invert a discrete schedule"),
        }
    }
}

impl std::error::Error for TypingError {}

/// The error type for building schedule expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An ill-typed combination of sub-expressions.
    Typing(TypingError),
    /// An out-of-range leaf parameter.
    Parameter(ParameterError),
    /// A malformed time or instant string.
    Parse(ParseError),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Typing(e) => write!(f, "Typing error: {}", e),
            Self::Parameter(e) => write!(f, "Parameter error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<TypingError> for BuildError {
    fn from(e: TypingError) -> Self {
        Self::Typing(e)
    }
}

impl From<ParameterError> for BuildError {
    fn from(e: ParameterError) -> Self {
        Self::Parameter(e)
    }
}

impl From<ParseError> for BuildError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
