//! IP uniqueness violation detection.
//!
//! Walks devices → VRFs → interfaces in snapshot order, records every address
//! holder in a [`DomainRegistry`] and emits a [`ViolationRecord`] each time a
//! holder count goes above the threshold for the address role.

use super::{extract_addresses, select_l3_config, DomainRegistry};
use crate::config::AuditPolicy;
use crate::models::{AddressRole, Location, Topology, ViolationRecord};
use std::fmt;

/// Counters collected during one detection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionStats {
    pub devices_scanned: usize,
    pub devices_excluded: usize,
    pub domains_scanned: usize,
    pub interfaces_scanned: usize,
    /// Interfaces with an IP-bearing configuration selected.
    pub interfaces_selected: usize,
    pub primary_addresses: usize,
    pub shared_virtual_addresses: usize,
}

impl fmt::Display for DetectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "devices={} (excluded={}) vrfs={} interfaces={} (l3={}) addresses primary={} fhrp={}",
            self.devices_scanned,
            self.devices_excluded,
            self.domains_scanned,
            self.interfaces_scanned,
            self.interfaces_selected,
            self.primary_addresses,
            self.shared_virtual_addresses
        )
    }
}

/// Find addresses held by too many interfaces within a VRF.
///
/// Violations are returned in discovery order. One record is emitted per
/// holder beyond the role threshold, each carrying the holder list (most
/// recent first) as it stood at that point.
pub fn detect(topology: &Topology, policy: &AuditPolicy) -> Vec<ViolationRecord> {
    detect_with_stats(topology, policy).0
}

/// Same as [`detect`], also returning pass counters.
pub fn detect_with_stats(
    topology: &Topology,
    policy: &AuditPolicy,
) -> (Vec<ViolationRecord>, DetectionStats) {
    let mut registry = DomainRegistry::new();
    let mut violations = Vec::new();
    let mut stats = DetectionStats::default();

    for device in &topology.devices {
        if policy.is_excluded(&device.name) {
            log::debug!("Skipping excluded device '{}'", device.name);
            stats.devices_excluded += 1;
            continue;
        }
        stats.devices_scanned += 1;

        for vrf in &device.network_instances {
            stats.domains_scanned += 1;

            for record in &vrf.interfaces {
                stats.interfaces_scanned += 1;

                let selected = select_l3_config(record);
                let Some(intf_name) = selected.name() else {
                    continue;
                };
                stats.interfaces_selected += 1;
                log::trace!(
                    "{}/{}: selected {} {intf_name}",
                    device.name,
                    vrf.name,
                    selected.kind()
                );

                for (role, address) in extract_addresses(&selected).iter() {
                    match role {
                        AddressRole::Primary => stats.primary_addresses += 1,
                        AddressRole::SharedVirtual => stats.shared_virtual_addresses += 1,
                    }

                    let location = Location::new(device.name.as_str(), intf_name);
                    let holders = registry.record(&vrf.name, address, location);
                    if holders.len() <= policy.threshold(role) {
                        continue;
                    }

                    let violation = ViolationRecord {
                        domain: vrf.name.clone(),
                        address: *address,
                        role,
                        holders: holders.iter().cloned().collect(),
                    };
                    log::debug!("Violation #{}: {violation}", violations.len() + 1);
                    violations.push(violation);
                }
            }
        }
    }

    log::info!(
        "Detection done: {} violation(s) in {} vrf(s); {stats}",
        violations.len(),
        registry.domain_count()
    );

    (violations, stats)
}
