//! Uniqueness violation data model.

use super::AddressEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who holds an address: a (device, interface) pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Name of the device.
    pub device: String,
    /// Name of the interface (the subinterface name when one was selected).
    pub interface: String,
}

impl Location {
    /// Create a new location.
    pub fn new(device: impl Into<String>, interface: impl Into<String>) -> Location {
        Location {
            device: device.into(),
            interface: interface.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.device, self.interface)
    }
}

/// Role an address plays on its interface.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressRole {
    /// The interface's own address.
    Primary,
    /// A first-hop redundancy (FHRP) virtual address shared with a peer.
    SharedVirtual,
}

impl fmt::Display for AddressRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressRole::Primary => write!(f, "primary"),
            AddressRole::SharedVirtual => write!(f, "fhrp"),
        }
    }
}

/// An address held by more locations than its role allows within one VRF.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViolationRecord {
    /// Routing domain (VRF) name.
    pub domain: String,
    /// The offending address as configured on the holder that tripped the threshold.
    pub address: AddressEntry,
    /// Role of the address on that holder.
    pub role: AddressRole,
    /// All holders at the time of detection, most recent first.
    pub holders: Vec<Location>,
}

impl fmt::Display for ViolationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let holders: Vec<String> = self.holders.iter().map(|h| h.to_string()).collect();
        write!(
            f,
            "vrf '{}' {} ({}) held by [{}]",
            self.domain,
            self.address.ip,
            self.role,
            holders.join(", ")
        )
    }
}
