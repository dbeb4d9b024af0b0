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

use crate::{
    constraint::{Constraints, PortPreference},
    spectrum::C_BAND,
    topology::node::NodeIdentifier,
};
use lightpath_core::prelude::{Frequency, FrequencyDelta};

/// Requested service framing. The kind decides the slot width of the
/// spectrum allocation and whether a manual spectrum selection is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    OneGigE,
    TenGigE,
    HundredGigE,
    Otu4,
    FourHundredGigE,
    OtuC4,
    Other,
}

impl ServiceKind {
    /// Flexible-grid slot count of the allocation: 87.5 GHz for the
    /// 400G classes, 50 GHz for everything else.
    #[inline]
    pub fn slot_width_slots(&self) -> usize {
        match self {
            ServiceKind::FourHundredGigE | ServiceKind::OtuC4 => 14,
            _ => 8,
        }
    }

    /// Services groomed onto an electrical (OTN) layer rather than a
    /// dedicated wavelength.
    #[inline]
    pub fn is_electrical(&self) -> bool {
        matches!(self, ServiceKind::OneGigE | ServiceKind::TenGigE)
    }

    /// Only the open "other" framing may pin its own center frequency and
    /// slot width; the fixed framings define theirs.
    #[inline]
    pub fn allows_custom_spectrum(&self) -> bool {
        matches!(self, ServiceKind::Other)
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ServiceKind::OneGigE => "1GE",
            ServiceKind::TenGigE => "10GE",
            ServiceKind::HundredGigE => "100GE",
            ServiceKind::Otu4 => "OTU4",
            ServiceKind::FourHundredGigE => "400GE",
            ServiceKind::OtuC4 => "OTUC4",
            ServiceKind::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Manually requested center-frequency / slot-width pair, validated
/// against the grid before any search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpectrumSelection {
    center: Frequency,
    width: FrequencyDelta,
}

impl SpectrumSelection {
    #[inline]
    pub fn new(center: Frequency, width: FrequencyDelta) -> Self {
        Self { center, width }
    }

    #[inline]
    pub fn from_thz_ghz(center_thz: f64, width_ghz: f64) -> Self {
        Self {
            center: Frequency::from_thz(center_thz),
            width: FrequencyDelta::from_ghz(width_ghz),
        }
    }

    #[inline]
    pub fn center(&self) -> Frequency {
        self.center
    }

    #[inline]
    pub fn width(&self) -> FrequencyDelta {
        self.width
    }
}

/// One end of the requested service: the terminating node, the requested
/// client ports per direction, and an optional manual spectrum selection.
#[derive(Debug, Clone)]
pub struct Endpoint {
    node: NodeIdentifier,
    rx_port: Option<String>,
    tx_port: Option<String>,
    spectrum: Option<SpectrumSelection>,
}

impl Endpoint {
    #[inline]
    pub fn new(node: NodeIdentifier) -> Self {
        Self {
            node,
            rx_port: None,
            tx_port: None,
            spectrum: None,
        }
    }

    #[inline]
    pub fn with_rx_port(mut self, port: impl Into<String>) -> Self {
        self.rx_port = Some(port.into());
        self
    }

    #[inline]
    pub fn with_tx_port(mut self, port: impl Into<String>) -> Self {
        self.tx_port = Some(port.into());
        self
    }

    #[inline]
    pub fn with_spectrum(mut self, spectrum: SpectrumSelection) -> Self {
        self.spectrum = Some(spectrum);
        self
    }

    #[inline]
    pub fn node(&self) -> &NodeIdentifier {
        &self.node
    }

    #[inline]
    pub fn rx_port(&self) -> Option<&str> {
        self.rx_port.as_deref()
    }

    #[inline]
    pub fn tx_port(&self) -> Option<&str> {
        self.tx_port.as_deref()
    }

    #[inline]
    pub fn spectrum(&self) -> Option<&SpectrumSelection> {
        self.spectrum.as_ref()
    }
}

/// One path computation request, read once at the start of a computation.
#[derive(Debug, Clone)]
pub struct PathRequest {
    a_end: Endpoint,
    z_end: Endpoint,
    service: ServiceKind,
    band: String,
    customer_profile: Option<String>,
    hard: Constraints,
    soft: Constraints,
}

impl PathRequest {
    #[inline]
    pub fn builder(a_end: Endpoint, z_end: Endpoint, service: ServiceKind) -> PathRequestBuilder {
        PathRequestBuilder::new(a_end, z_end, service)
    }

    #[inline]
    pub fn a_end(&self) -> &Endpoint {
        &self.a_end
    }

    #[inline]
    pub fn z_end(&self) -> &Endpoint {
        &self.z_end
    }

    #[inline]
    pub fn source(&self) -> &NodeIdentifier {
        self.a_end.node()
    }

    #[inline]
    pub fn destination(&self) -> &NodeIdentifier {
        self.z_end.node()
    }

    #[inline]
    pub fn service(&self) -> ServiceKind {
        self.service
    }

    #[inline]
    pub fn band(&self) -> &str {
        &self.band
    }

    #[inline]
    pub fn customer_profile(&self) -> Option<&str> {
        self.customer_profile.as_deref()
    }

    #[inline]
    pub fn hard(&self) -> &Constraints {
        &self.hard
    }

    #[inline]
    pub fn soft(&self) -> &Constraints {
        &self.soft
    }

    /// The manual spectrum selection in effect, A-end taking precedence.
    #[inline]
    pub fn spectrum_selection(&self) -> Option<&SpectrumSelection> {
        self.a_end.spectrum().or_else(|| self.z_end.spectrum())
    }

    /// Port preferences derived from the endpoint Rx/Tx port names.
    pub fn port_preference(&self) -> PortPreference {
        let mut pref = PortPreference::new();
        for end in [&self.a_end, &self.z_end] {
            for port in [end.rx_port(), end.tx_port()].into_iter().flatten() {
                pref.add_port(end.node().clone(), port);
            }
        }
        pref
    }
}

#[derive(Debug, Clone)]
pub struct PathRequestBuilder {
    request: PathRequest,
}

impl PathRequestBuilder {
    #[inline]
    pub fn new(a_end: Endpoint, z_end: Endpoint, service: ServiceKind) -> Self {
        Self {
            request: PathRequest {
                a_end,
                z_end,
                service,
                band: C_BAND.to_string(),
                customer_profile: None,
                hard: Constraints::new(),
                soft: Constraints::new(),
            },
        }
    }

    #[inline]
    pub fn with_band(mut self, band: impl Into<String>) -> Self {
        self.request.band = band.into();
        self
    }

    #[inline]
    pub fn with_customer_profile(mut self, profile: impl Into<String>) -> Self {
        self.request.customer_profile = Some(profile.into());
        self
    }

    #[inline]
    pub fn with_hard_constraints(mut self, hard: Constraints) -> Self {
        self.request.hard = hard;
        self
    }

    #[inline]
    pub fn with_soft_constraints(mut self, soft: Constraints) -> Self {
        self.request.soft = soft;
        self
    }

    #[inline]
    pub fn build(self) -> PathRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nid(name: &str) -> NodeIdentifier {
        NodeIdentifier::new(name.to_string())
    }

    #[test]
    fn test_service_slot_widths() {
        assert_eq!(ServiceKind::HundredGigE.slot_width_slots(), 8);
        assert_eq!(ServiceKind::Otu4.slot_width_slots(), 8);
        assert_eq!(ServiceKind::FourHundredGigE.slot_width_slots(), 14);
        assert_eq!(ServiceKind::OtuC4.slot_width_slots(), 14);
        assert_eq!(ServiceKind::TenGigE.slot_width_slots(), 8);
    }

    #[test]
    fn test_service_flags() {
        assert!(ServiceKind::OneGigE.is_electrical());
        assert!(ServiceKind::TenGigE.is_electrical());
        assert!(!ServiceKind::HundredGigE.is_electrical());
        assert!(ServiceKind::Other.allows_custom_spectrum());
        assert!(!ServiceKind::Otu4.allows_custom_spectrum());
    }

    #[test]
    fn test_builder_defaults() {
        let r = PathRequest::builder(
            Endpoint::new(nid("XPDR-A")),
            Endpoint::new(nid("XPDR-Z")),
            ServiceKind::HundredGigE,
        )
        .build();

        assert_eq!(r.source(), &nid("XPDR-A"));
        assert_eq!(r.destination(), &nid("XPDR-Z"));
        assert_eq!(r.band(), C_BAND);
        assert!(r.customer_profile().is_none());
        assert!(r.spectrum_selection().is_none());
        assert!(r.hard().is_empty());
        assert!(r.port_preference().is_empty());
    }

    #[test]
    fn test_spectrum_selection_a_end_precedence() {
        let a_sel = SpectrumSelection::from_thz_ghz(193.1, 50.0);
        let z_sel = SpectrumSelection::from_thz_ghz(195.0, 50.0);
        let r = PathRequest::builder(
            Endpoint::new(nid("A")).with_spectrum(a_sel),
            Endpoint::new(nid("Z")).with_spectrum(z_sel),
            ServiceKind::Other,
        )
        .build();
        assert_eq!(r.spectrum_selection(), Some(&a_sel));
    }

    #[test]
    fn test_port_preference_derivation() {
        let r = PathRequest::builder(
            Endpoint::new(nid("XPDR-A"))
                .with_rx_port("XPDR1-CLIENT1")
                .with_tx_port("XPDR1-CLIENT2"),
            Endpoint::new(nid("XPDR-Z")).with_tx_port("  "),
            ServiceKind::HundredGigE,
        )
        .build();

        let pref = r.port_preference();
        assert!(pref.has_preference_for(&nid("XPDR-A")));
        assert!(pref.is_preferred_port(&nid("XPDR-A"), "XPDR1-CLIENT1"));
        assert!(pref.is_preferred_port(&nid("XPDR-A"), "XPDR1-CLIENT2"));
        assert!(!pref.is_preferred_port(&nid("XPDR-A"), "XPDR1-CLIENT9"));
        // Blank Z-end port was skipped entirely.
        assert!(!pref.has_preference_for(&nid("XPDR-Z")));
    }
}
