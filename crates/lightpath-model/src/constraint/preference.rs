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

use crate::topology::node::NodeIdentifier;
use std::collections::{BTreeSet, HashMap};

/// Port preferences derived once per request from the endpoint port names.
/// A node without an entry has no opinion: any port is acceptable there.
#[derive(Debug, Clone, Default)]
pub struct PortPreference {
    preferred: HashMap<NodeIdentifier, BTreeSet<String>>,
}

impl PortPreference {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a preferred port for a node. Blank names are skipped.
    pub fn add_port(&mut self, node: NodeIdentifier, port: &str) -> &mut Self {
        let trimmed = port.trim();
        if trimmed.is_empty() {
            return self;
        }
        self.preferred
            .entry(node)
            .or_default()
            .insert(trimmed.to_string());
        self
    }

    /// True when the node has no preference entry, or when the port is
    /// explicitly preferred for it.
    pub fn is_preferred_port(&self, node: &NodeIdentifier, port: &str) -> bool {
        match self.preferred.get(node) {
            None => true,
            Some(ports) => ports.contains(port),
        }
    }

    #[inline]
    pub fn has_preference_for(&self, node: &NodeIdentifier) -> bool {
        self.preferred.contains_key(node)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.preferred.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nid(name: &str) -> NodeIdentifier {
        NodeIdentifier::new(name.to_string())
    }

    #[test]
    fn test_no_entry_means_no_opinion() {
        let pref = PortPreference::new();
        assert!(pref.is_preferred_port(&nid("A"), "anything"));
        assert!(!pref.has_preference_for(&nid("A")));
    }

    #[test]
    fn test_listed_port_is_preferred() {
        let mut pref = PortPreference::new();
        pref.add_port(nid("XPDR-A"), "XPDR1-NETWORK1");
        pref.add_port(nid("XPDR-A"), "XPDR1-NETWORK2");

        assert!(pref.is_preferred_port(&nid("XPDR-A"), "XPDR1-NETWORK1"));
        assert!(pref.is_preferred_port(&nid("XPDR-A"), "XPDR1-NETWORK2"));
        assert!(!pref.is_preferred_port(&nid("XPDR-A"), "XPDR1-NETWORK3"));
        // Other nodes stay unconstrained.
        assert!(pref.is_preferred_port(&nid("XPDR-Z"), "XPDR1-NETWORK3"));
    }

    #[test]
    fn test_blank_ports_are_skipped() {
        let mut pref = PortPreference::new();
        pref.add_port(nid("A"), "");
        pref.add_port(nid("A"), "   ");
        assert!(pref.is_empty());
        assert!(pref.is_preferred_port(&nid("A"), "any"));
    }
}
