//! Address extraction from a selected interface configuration.

use super::L3Config;
use crate::models::{AddressEntry, AddressRole};

/// Primary and shared-virtual addresses of one interface, as configured.
///
/// No de-duplication happens here; repeated entries are counted as repeated
/// holders by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AddressSets<'a> {
    pub primary: &'a [AddressEntry],
    pub shared_virtual: &'a [AddressEntry],
}

impl<'a> AddressSets<'a> {
    /// All addresses tagged with their role, primary addresses first.
    pub fn iter(&self) -> impl Iterator<Item = (AddressRole, &'a AddressEntry)> {
        let primary = self.primary;
        let shared_virtual = self.shared_virtual;
        primary
            .iter()
            .map(|a| (AddressRole::Primary, a))
            .chain(shared_virtual.iter().map(|a| (AddressRole::SharedVirtual, a)))
    }
}

/// Read the address sets of a selected configuration. [`L3Config::None`] has none.
pub fn extract_addresses<'a>(config: &L3Config<'a>) -> AddressSets<'a> {
    match config.ipv4() {
        Some(ipv4) => AddressSets {
            primary: &ipv4.addresses,
            shared_virtual: &ipv4.fhrp_addresses,
        },
        None => AddressSets::default(),
    }
}
