//! IPv4 interface address with prefix length.
//!
//! Provides [`AddressEntry`], the unit an interface holds in either its
//! primary or its shared-virtual (FHRP) address list.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Deserialize a prefix length, rejecting anything wider than 32 bits.
fn deserialize_prefix_length<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let len = u8::deserialize(deserializer)?;
    if len > MAX_LENGTH {
        return Err(de::Error::custom(format!(
            "invalid prefix length: {len} (max {MAX_LENGTH})"
        )));
    }
    Ok(len)
}

/// An IPv4 address as configured on an interface.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AddressEntry {
    /// The interface address.
    pub ip: Ipv4Addr,
    /// The prefix length (0-32).
    #[serde(deserialize_with = "deserialize_prefix_length")]
    pub prefix_length: u8,
}

impl AddressEntry {
    /// Create a new [`AddressEntry`] from CIDR notation (e.g., "10.0.0.1/24").
    pub fn new(addr_cidr: &str) -> Result<AddressEntry, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = addr_cidr
            .split_once('/')
            .ok_or_else(|| format!("Invalid address/prefix {addr_cidr}"))?;
        let ip: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        let prefix_length: u8 = len
            .parse()
            .map_err(|_| format!("Invalid prefix length {len}"))?;
        if prefix_length > MAX_LENGTH {
            return Err("Prefix length is too long".into());
        }
        Ok(AddressEntry { ip, prefix_length })
    }
}

impl std::fmt::Display for AddressEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.ip, self.prefix_length)
    }
}
