//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing an address with its prefix length,
//! along with the bit arithmetic behind every subnet calculation.

use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Largest value a single octet may hold.
pub const MAX_OCTET: u32 = 255;

fn check_len(len: u8) -> Result<()> {
    if len > MAX_LENGTH {
        Err(SubnetError::Range {
            field: "prefix",
            value: len as u32,
            max: MAX_LENGTH as u32,
        })
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_visualizer::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_len(len)?;
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    // u64 so that a shift by 32 (prefix 0) is defined
    let mask = (all_bits >> right_len) << right_len;

    Ok(mask as u32)
}

/// Subnet mask for a prefix length in dotted form, most significant octet first.
pub fn mask_addr(len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Network address: `addr` AND `mask`, octet by octet.
pub fn network_addr(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    let [a, b, c, d] = addr.octets();
    let [ma, mb, mc, md] = mask.octets();
    Ipv4Addr::new(a & ma, b & mb, c & mc, d & md)
}

/// Broadcast address: `network` OR the 8-bit complement of `mask`, octet by octet.
pub fn broadcast_addr(network: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    let [a, b, c, d] = network.octets();
    let [ma, mb, mc, md] = mask.octets();
    Ipv4Addr::new(a | (255 - ma), b | (255 - mb), c | (255 - mc), d | (255 - md))
}

/// Total number of addresses in a subnet of the given prefix length.
pub fn num_addresses(len: u8) -> Result<u64> {
    check_len(len)?;
    Ok(1u64 << (MAX_LENGTH - len))
}

/// Addresses left once network and broadcast are taken out, floored at zero.
///
/// /31 and /32 both give 0; point-to-point links (RFC 3021) are not special-cased.
pub fn num_usable(len: u8) -> Result<u64> {
    Ok(num_addresses(len)?.saturating_sub(2))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Accepts exactly what [`crate::calculator::parse`] accepts and rejects
    /// out-of-range octets or prefix.
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let input = crate::calculator::parse(addr_cidr)?;
        crate::calculator::check(&input)
    }

    /// Subnet mask in dotted form.
    pub fn netmask(&self) -> Ipv4Addr {
        let host_len = MAX_LENGTH.saturating_sub(self.mask) as u32;
        // shl by 32 is None, which is the /0 mask
        Ipv4Addr::from(u32::MAX.checked_shl(host_len).unwrap_or(0))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        network_addr(self.addr, self.netmask())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.lo(), self.netmask())
    }

    /// True if `ip` falls between the network and broadcast address.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }
}

impl FromStr for Ipv4 {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
