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

//! Turn-validity rules of the ROADM add/drop/express structure, expressed
//! as one lookup over `(previous, next)` link-kind pairs so the rule set
//! is exhaustively testable.
//!
//! Requirements on the predecessor side:
//! - ADD only after XPONDER-OUTPUT
//! - DROP and EXPRESS only after ROADM-TO-ROADM
//!
//! Obligations on the successor side:
//! - ADD and EXPRESS must continue into ROADM-TO-ROADM
//! - DROP, if continued at all, continues into XPONDER-INPUT

use lightpath_model::topology::link::LinkKind;

/// Whether `next` may be appended to a partial path whose last edge is
/// `prev` (`None` for the first edge of a path).
pub fn is_turn_allowed(prev: Option<LinkKind>, next: LinkKind) -> bool {
    use LinkKind::*;
    match (prev, next) {
        // Predecessor requirements of the appended edge.
        (p, Add) => p == Some(XponderOutput),
        (p, Drop) | (p, Express) => p == Some(RoadmToRoadm),
        // Successor obligations of the previous edge; `next` is now one
        // of RoadmToRoadm, XponderInput, XponderOutput.
        (Some(Add), n) | (Some(Express), n) => n == RoadmToRoadm,
        (Some(Drop), n) => n == XponderInput,
        _ => true,
    }
}

/// Whether a path may end on an edge of this kind. ADD and EXPRESS owe a
/// downstream ROADM-TO-ROADM edge that never arrived; DROP's obligation
/// is conditional on a next edge existing, so it may terminate.
#[inline]
pub fn may_terminate(last: LinkKind) -> bool {
    !matches!(last, LinkKind::Add | LinkKind::Express)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LinkKind::*;

    const ALL: [LinkKind; 6] = [RoadmToRoadm, Add, Drop, Express, XponderInput, XponderOutput];

    #[test]
    fn test_add_requires_xponder_output_before() {
        for prev in ALL {
            let expected = prev == XponderOutput;
            assert_eq!(is_turn_allowed(Some(prev), Add), expected, "prev {}", prev);
        }
        assert!(!is_turn_allowed(None, Add));
    }

    #[test]
    fn test_drop_and_express_require_line_edge_before() {
        for next in [Drop, Express] {
            for prev in ALL {
                let expected = prev == RoadmToRoadm;
                assert_eq!(
                    is_turn_allowed(Some(prev), next),
                    expected,
                    "prev {} next {}",
                    prev,
                    next
                );
            }
            assert!(!is_turn_allowed(None, next));
        }
    }

    #[test]
    fn test_add_and_express_must_continue_into_line_edge() {
        // ADD and EXPRESS tolerate only ROADM-TO-ROADM afterwards.
        for next in ALL {
            let expected = next == RoadmToRoadm;
            assert_eq!(is_turn_allowed(Some(Add), next), expected, "next {}", next);
            assert_eq!(
                is_turn_allowed(Some(Express), next),
                expected,
                "next {}",
                next
            );
        }
    }

    #[test]
    fn test_drop_continues_into_xponder_input_only() {
        for next in ALL {
            let expected = next == XponderInput;
            assert_eq!(is_turn_allowed(Some(Drop), next), expected, "next {}", next);
        }
    }

    #[test]
    fn test_line_and_xponder_edges_are_permissive() {
        // ROADM-TO-ROADM and the transponder edges impose nothing on an
        // appended edge that has no requirement of its own.
        for prev in [RoadmToRoadm, XponderInput, XponderOutput] {
            assert!(is_turn_allowed(Some(prev), RoadmToRoadm));
            assert!(is_turn_allowed(Some(prev), XponderInput));
            assert!(is_turn_allowed(Some(prev), XponderOutput));
        }
        assert!(is_turn_allowed(None, RoadmToRoadm));
        assert!(is_turn_allowed(None, XponderOutput));
    }

    #[test]
    fn test_spec_properties() {
        // An ADD edge never directly follows a ROADM-TO-ROADM edge.
        assert!(!is_turn_allowed(Some(RoadmToRoadm), Add));
        // An EXPRESS edge never directly follows an ADD edge.
        assert!(!is_turn_allowed(Some(Add), Express));
    }

    #[test]
    fn test_termination() {
        assert!(may_terminate(Drop));
        assert!(may_terminate(RoadmToRoadm));
        assert!(may_terminate(XponderInput));
        assert!(may_terminate(XponderOutput));
        assert!(!may_terminate(Add));
        assert!(!may_terminate(Express));
    }
}
