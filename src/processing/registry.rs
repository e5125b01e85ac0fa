//! Per-VRF address holder bookkeeping.

use crate::models::{AddressEntry, Location};
use std::collections::{HashMap, VecDeque};
use std::net::Ipv4Addr;

type StrDomain = str;

/// Maps each routing domain to address → holders.
///
/// Domains are keyed by name only, so the same VRF name on different devices
/// shares one holder table. Addresses are keyed by IP only; the prefix length
/// does not distinguish holders. Primary and shared-virtual roles share the
/// same holder list.
#[derive(Debug, Default)]
pub struct DomainRegistry {
    domains: HashMap<String, HashMap<Ipv4Addr, VecDeque<Location>>>,
}

impl DomainRegistry {
    /// Create a new empty registry.
    pub fn new() -> DomainRegistry {
        DomainRegistry {
            domains: HashMap::new(),
        }
    }

    /// Insert `location` at the front of the holder list for (domain, address)
    /// and return the updated list, most recent first. Its length is the new
    /// holder count.
    pub fn record(
        &mut self,
        domain: &StrDomain,
        address: &AddressEntry,
        location: Location,
    ) -> &VecDeque<Location> {
        if !self.domains.contains_key(domain) {
            self.domains.insert(domain.to_string(), HashMap::new());
        }
        let ips = self.domains.get_mut(domain).unwrap();
        let holders = ips.entry(address.ip).or_default();
        holders.push_front(location);
        holders
    }

    /// Number of distinct routing domains seen.
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(holders: &VecDeque<Location>) -> Vec<Location> {
        holders.iter().cloned().collect()
    }

    #[test]
    fn test_record_counts_and_order() {
        let mut reg = DomainRegistry::new();
        let addr = AddressEntry::new("10.0.0.1/24").unwrap();

        assert_eq!(reg.record("core", &addr, Location::new("A", "Gi0/1")).len(), 1);
        assert_eq!(reg.record("core", &addr, Location::new("B", "Gi0/2")).len(), 2);
        let holders = reg.record("core", &addr, Location::new("C", "Gi0/3"));

        assert_eq!(
            snapshot(holders),
            vec![
                Location::new("C", "Gi0/3"),
                Location::new("B", "Gi0/2"),
                Location::new("A", "Gi0/1"),
            ]
        );
    }

    #[test]
    fn test_domains_are_independent() {
        let mut reg = DomainRegistry::new();
        let addr = AddressEntry::new("10.0.0.1/24").unwrap();

        reg.record("core", &addr, Location::new("A", "Gi0/1"));
        let mgmt = reg.record("mgmt", &addr, Location::new("A", "Mgmt0"));
        assert_eq!(snapshot(mgmt), vec![Location::new("A", "Mgmt0")]);
        assert_eq!(reg.domain_count(), 2);
    }

    #[test]
    fn test_existing_domain_is_reused() {
        let mut reg = DomainRegistry::new();
        let a = AddressEntry::new("10.0.0.1/24").unwrap();
        let b = AddressEntry::new("10.0.0.2/24").unwrap();

        reg.record("core", &a, Location::new("A", "Gi0/1"));
        reg.record("core", &b, Location::new("A", "Gi0/2"));
        assert_eq!(reg.domain_count(), 1);
        assert_eq!(reg.record("core", &a, Location::new("B", "Gi0/1")).len(), 2);
        assert_eq!(reg.record("core", &b, Location::new("B", "Gi0/2")).len(), 2);
    }

    #[test]
    fn test_prefix_length_does_not_split_holders() {
        let mut reg = DomainRegistry::new();
        let a = AddressEntry::new("10.0.0.1/24").unwrap();
        let b = AddressEntry::new("10.0.0.1/32").unwrap();

        reg.record("core", &a, Location::new("A", "Gi0/1"));
        assert_eq!(reg.record("core", &b, Location::new("B", "Lo0")).len(), 2);
    }
}
