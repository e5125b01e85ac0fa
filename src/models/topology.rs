//! Network topology snapshot data model.
//!
//! Mirrors the shape returned by the network query: devices own routing
//! domain (VRF) memberships, which own interfaces, which carry IPv4 config.

use super::AddressEntry;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Administrative or operational status of an interface.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Up,
    Down,
    /// Any status value other than `UP`/`DOWN` (e.g. `TESTING`).
    #[serde(other)]
    Other,
}

impl Status {
    /// Only `UP` counts as enabled.
    pub fn is_up(&self) -> bool {
        matches!(self, Status::Up)
    }
}

/// IPv4 addressing block attached to an IP-bearing construct.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4Config {
    /// Primary addresses owned by the interface.
    #[serde(default, deserialize_with = "null_as_default")]
    pub addresses: Vec<AddressEntry>,
    /// Shared-virtual (FHRP) addresses held together with a redundancy peer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fhrp_addresses: Vec<AddressEntry>,
}

/// Bridge, routed-VLAN or tunnel role of a parent interface.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RoleConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipv4: Ipv4Config,
}

/// Logical subinterface carried under a parent interface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubInterface {
    pub name: String,
    pub admin_status: Status,
    #[serde(default)]
    pub oper_status: Option<Status>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipv4: Ipv4Config,
}

/// Parent interface with its optional IP-bearing roles.
///
/// At most one of `bridge`, `routed_vlan`, `tunnel` is normally populated; a
/// plain switchport has none.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interface {
    pub name: String,
    pub admin_status: Status,
    #[serde(default)]
    pub oper_status: Option<Status>,
    /// Vendor-neutral interface type (e.g. `IF_ETHERNET`), informational only.
    #[serde(default)]
    pub interface_type: Option<String>,
    #[serde(default)]
    pub routed_vlan: Option<RoleConfig>,
    #[serde(default)]
    pub bridge: Option<RoleConfig>,
    #[serde(default)]
    pub tunnel: Option<RoleConfig>,
}

/// One interface membership of a routing domain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceRecord {
    #[serde(default)]
    pub sub_iface: Option<SubInterface>,
    pub iface: Interface,
}

/// A routing domain (VRF) as seen on one device.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkInstance {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interfaces: Vec<InterfaceRecord>,
}

/// A network device in the snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_instances: Vec<NetworkInstance>,
}

/// A complete topology snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Topology {
    pub devices: Vec<Device>,
}

impl Topology {
    /// Number of (device, routing domain) memberships in the snapshot.
    pub fn domain_count(&self) -> usize {
        self.devices.iter().map(|d| d.network_instances.len()).sum()
    }
}
