//! Interface selection.
//!
//! Picks the one configuration record that carries an interface's active
//! Layer-3 identity.

use crate::models::{InterfaceRecord, Ipv4Config};

/// The IP-bearing construct selected for an interface, in precedence order.
///
/// A present subinterface always wins over the parent's own roles; the parent
/// roles are ranked bridge, routed-VLAN, tunnel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum L3Config<'a> {
    /// No IP-relevant role (disabled, or a plain switchport).
    None,
    SubInterface { name: &'a str, ipv4: &'a Ipv4Config },
    Bridge { name: &'a str, ipv4: &'a Ipv4Config },
    RoutedVlan { name: &'a str, ipv4: &'a Ipv4Config },
    Tunnel { name: &'a str, ipv4: &'a Ipv4Config },
}

impl<'a> L3Config<'a> {
    /// Interface name to report holders under.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            L3Config::None => None,
            L3Config::SubInterface { name, .. }
            | L3Config::Bridge { name, .. }
            | L3Config::RoutedVlan { name, .. }
            | L3Config::Tunnel { name, .. } => Some(name),
        }
    }

    /// The selected IPv4 block.
    pub fn ipv4(&self) -> Option<&'a Ipv4Config> {
        match *self {
            L3Config::None => None,
            L3Config::SubInterface { ipv4, .. }
            | L3Config::Bridge { ipv4, .. }
            | L3Config::RoutedVlan { ipv4, .. }
            | L3Config::Tunnel { ipv4, .. } => Some(ipv4),
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            L3Config::None => "none",
            L3Config::SubInterface { .. } => "subinterface",
            L3Config::Bridge { .. } => "bridge",
            L3Config::RoutedVlan { .. } => "routed-vlan",
            L3Config::Tunnel { .. } => "tunnel",
        }
    }
}

/// Select the IP-bearing configuration of an interface.
///
/// First match wins:
/// 1. A subinterface record decides alone: enabled selects it, disabled
///    skips the whole interface without looking at the parent's roles.
/// 2. A disabled parent is skipped.
/// 3. The parent's bridge, routed-VLAN, tunnel role, in that order.
/// 4. Otherwise nothing (e.g. a switchport).
///
/// The parent's admin status is only checked when there is no subinterface,
/// so an enabled subinterface is selected even under a disabled parent.
pub fn select_l3_config(record: &InterfaceRecord) -> L3Config<'_> {
    let iface = &record.iface;
    match &record.sub_iface {
        Some(sub) if sub.admin_status.is_up() => L3Config::SubInterface {
            name: &sub.name,
            ipv4: &sub.ipv4,
        },
        Some(sub) => {
            log::trace!("skip {}: subinterface {} is disabled", iface.name, sub.name);
            L3Config::None
        }
        None if !iface.admin_status.is_up() => {
            log::trace!("skip {}: interface is disabled", iface.name);
            L3Config::None
        }
        None => match (&iface.bridge, &iface.routed_vlan, &iface.tunnel) {
            (Some(role), _, _) => L3Config::Bridge {
                name: &iface.name,
                ipv4: &role.ipv4,
            },
            (None, Some(role), _) => L3Config::RoutedVlan {
                name: &iface.name,
                ipv4: &role.ipv4,
            },
            (None, None, Some(role)) => L3Config::Tunnel {
                name: &iface.name,
                ipv4: &role.ipv4,
            },
            (None, None, None) => {
                log::trace!("skip {}: no IP-bearing role", iface.name);
                L3Config::None
            }
        },
    }
}
