//! Domain models for the VRF IP uniqueness audit.
//!
//! This module contains the core data structures used throughout the application:
//! - [`AddressEntry`] - IPv4 interface address with prefix length
//! - [`Topology`] and its nested devices, VRFs and interfaces
//! - [`Location`] and [`ViolationRecord`] - audit findings

mod address;
mod topology;
mod violation;

// Re-export public types
pub use address::{AddressEntry, MAX_LENGTH};
pub use topology::{
    Device, Interface, InterfaceRecord, Ipv4Config, NetworkInstance, RoleConfig, Status,
    SubInterface, Topology,
};
pub use violation::{AddressRole, Location, ViolationRecord};
