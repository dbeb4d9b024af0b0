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

pub trait IdentifierMarkerName: Copy {
    const NAME: &'static str;
}

/// Identity of a topology element, tagged by a marker type so a node id
/// and a link id can never be confused even though both are strings.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier<I, U>(I, core::marker::PhantomData<U>);

impl<I, U> Identifier<I, U> {
    #[inline]
    pub fn new(id: I) -> Self {
        Self(id, core::marker::PhantomData)
    }

    #[inline]
    pub fn value(&self) -> &I {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<U> Identifier<String, U> {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<I, U> std::fmt::Display for Identifier<I, U>
where
    I: std::fmt::Display,
    U: IdentifierMarkerName,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    struct ProbeMarker;

    impl IdentifierMarkerName for ProbeMarker {
        const NAME: &'static str = "ProbeId";
    }

    type ProbeIdentifier = Identifier<String, ProbeMarker>;

    #[test]
    fn test_display_and_value() {
        let id = ProbeIdentifier::new("ROADM-A-DEG1".to_string());
        assert_eq!(format!("{}", id), "ProbeId(ROADM-A-DEG1)");
        assert_eq!(id.value(), "ROADM-A-DEG1");
        assert_eq!(id.as_str(), "ROADM-A-DEG1");
    }

    #[test]
    fn test_equality_and_ordering() {
        let a = ProbeIdentifier::new("a".to_string());
        let b = ProbeIdentifier::new("b".to_string());
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(a.clone().into_inner(), "a");
    }
}
