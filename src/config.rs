//! Application constants and audit policy.

use crate::models::AddressRole;
use std::collections::HashSet;

/// Devices skipped by default. Units in backup mode carry duplicate IPs intentionally.
pub const DEFAULT_EXCLUDED_DEVICES: [&str; 1] = ["atl-edge-fw02"];

/// A primary address may be held by one interface per VRF.
pub const DEFAULT_PRIMARY_THRESHOLD: usize = 1;

/// A shared-virtual (FHRP) address may be held by one redundancy pair per VRF.
pub const DEFAULT_SHARED_VIRTUAL_THRESHOLD: usize = 2;

/// Prefix for topology cache files written next to the binary.
pub const CACHE_FILE_PREFIX: &str = "topology_cache";

/// Timeout for the network query, in seconds.
pub const HTTP_TIMEOUT_SEC: u64 = 120;

/// log4rs configuration file, read from the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Which devices to skip and how many holders each address role may have.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditPolicy {
    /// Device names that contribute no holders.
    pub excluded_devices: HashSet<String>,
    /// Holder count above which a primary address is a violation.
    pub primary_threshold: usize,
    /// Holder count above which a shared-virtual address is a violation.
    pub shared_virtual_threshold: usize,
}

impl AuditPolicy {
    /// Policy with default thresholds and the given exclusion list.
    pub fn with_excluded<I, S>(excluded: I) -> AuditPolicy
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AuditPolicy {
            excluded_devices: excluded.into_iter().map(Into::into).collect(),
            ..AuditPolicy::no_exclusions()
        }
    }

    /// Policy with default thresholds and an empty exclusion list.
    pub fn no_exclusions() -> AuditPolicy {
        AuditPolicy {
            excluded_devices: HashSet::new(),
            primary_threshold: DEFAULT_PRIMARY_THRESHOLD,
            shared_virtual_threshold: DEFAULT_SHARED_VIRTUAL_THRESHOLD,
        }
    }

    pub fn is_excluded(&self, device: &str) -> bool {
        self.excluded_devices.contains(device)
    }

    /// Holder count a role may reach before further holders are violations.
    pub fn threshold(&self, role: AddressRole) -> usize {
        match role {
            AddressRole::Primary => self.primary_threshold,
            AddressRole::SharedVirtual => self.shared_virtual_threshold,
        }
    }
}

impl Default for AuditPolicy {
    fn default() -> Self {
        AuditPolicy::with_excluded(DEFAULT_EXCLUDED_DEVICES)
    }
}
