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

use crate::spectrum::bitmap::SpectrumBitmap;
use std::collections::HashMap;
use tracing::warn;

/// Operator-supplied spectrum-filling rules, one allowed-slots bitmap per
/// customer profile name. Read-only reference data for a computation.
#[derive(Debug, Clone, Default)]
pub struct OperatorProfiles {
    rules: HashMap<String, SpectrumBitmap>,
}

impl OperatorProfiles {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert(&mut self, profile: impl Into<String>, allowed: SpectrumBitmap) -> &mut Self {
        self.rules.insert(profile.into(), allowed);
        self
    }

    /// Spectrum-filling bitmap for a customer profile. An unknown profile
    /// is a degraded-data case: the computation proceeds unrestricted.
    pub fn bitmap_constraint(&self, profile: &str) -> Option<&SpectrumBitmap> {
        let rule = self.rules.get(profile);
        if rule.is_none() {
            warn!(profile, "no spectrum-filling rule for customer profile");
        }
        rule
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
