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

use lightpath_model::{topology::node::NodeIdentifier, validation::err::RequestValidationError};

/// The graph holds no route between the endpoints that satisfies the turn
/// rules. A normal outcome, not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoPathError {
    source: NodeIdentifier,
    destination: NodeIdentifier,
}

impl NoPathError {
    pub fn new(source: NodeIdentifier, destination: NodeIdentifier) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn source(&self) -> &NodeIdentifier {
        &self.source
    }

    pub fn destination(&self) -> &NodeIdentifier {
        &self.destination
    }
}

impl std::fmt::Display for NoPathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No path exists between {} and {}",
            self.source, self.destination
        )
    }
}

impl std::error::Error for NoPathError {}

/// Routes exist, but none of the candidates had a wavelength or slot range
/// free on every node it touches. Distinct from [`NoPathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpectrumExhaustedError {
    candidates: usize,
}

impl SpectrumExhaustedError {
    pub fn new(candidates: usize) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }
}

impl std::fmt::Display for SpectrumExhaustedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No usable wavelength or slot range on any of {} candidate paths",
            self.candidates
        )
    }
}

impl std::error::Error for SpectrumExhaustedError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    Request(RequestValidationError),
    NoPath(NoPathError),
    SpectrumExhausted(SpectrumExhaustedError),
}

impl std::fmt::Display for ComputeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComputeError::Request(e) => write!(f, "{}", e),
            ComputeError::NoPath(e) => write!(f, "{}", e),
            ComputeError::SpectrumExhausted(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ComputeError {}

impl From<RequestValidationError> for ComputeError {
    fn from(err: RequestValidationError) -> Self {
        ComputeError::Request(err)
    }
}

impl From<NoPathError> for ComputeError {
    fn from(err: NoPathError) -> Self {
        ComputeError::NoPath(err)
    }
}

impl From<SpectrumExhaustedError> for ComputeError {
    fn from(err: SpectrumExhaustedError) -> Self {
        ComputeError::SpectrumExhausted(err)
    }
}
