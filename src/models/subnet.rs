//! Subnet calculation records.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Raw numbers pulled out of a CIDR expression, not yet range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidrInput {
    /// The four address groups, most significant first.
    pub octets: [u32; 4],
    /// The number after the slash.
    pub prefix: u32,
}

/// Total and usable address counts for a prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressCounts {
    pub total: u64,
    pub usable: u64,
}

/// Everything derived from one valid CIDR expression.
///
/// Only built by the calculator, so it is serialized but never read back.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetResult {
    /// Address as entered.
    pub ip: Ipv4Addr,
    /// Subnet mask derived from the prefix.
    pub mask: Ipv4Addr,
    /// All host bits cleared.
    pub network: Ipv4Addr,
    /// All host bits set.
    pub broadcast: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix: u8,
    /// 2^(32-prefix).
    pub total_addresses: u64,
    /// Total minus network and broadcast, floored at zero.
    pub usable_addresses: u64,
}

impl SubnetResult {
    /// The input address with its prefix.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.ip,
            mask: self.prefix,
        }
    }

    /// The subnet itself, e.g. `10.0.0.0/8` for input `10.0.0.5/8`.
    pub fn network_cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network,
            mask: self.prefix,
        }
    }

    pub fn counts(&self) -> AddressCounts {
        AddressCounts {
            total: self.total_addresses,
            usable: self.usable_addresses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SubnetResult {
        SubnetResult {
            ip: Ipv4Addr::new(10, 0, 0, 5),
            mask: Ipv4Addr::new(255, 0, 0, 0),
            network: Ipv4Addr::new(10, 0, 0, 0),
            broadcast: Ipv4Addr::new(10, 255, 255, 255),
            prefix: 8,
            total_addresses: 16777216,
            usable_addresses: 16777214,
        }
    }

    #[test]
    fn test_cidr() {
        let r = sample();
        assert_eq!(r.cidr().to_string(), "10.0.0.5/8");
        assert_eq!(r.network_cidr().to_string(), "10.0.0.0/8");
    }

    #[test]
    fn test_counts() {
        let c = sample().counts();
        assert_eq!(c.total, 16777216);
        assert_eq!(c.usable, 16777214);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["ip"], "10.0.0.5");
        assert_eq!(json["mask"], "255.0.0.0");
        assert_eq!(json["broadcast"], "10.255.255.255");
        assert_eq!(json["totalAddresses"], 16777216u64);
        assert_eq!(json["usableAddresses"], 16777214u64);
        assert_eq!(json["prefix"], 8);
    }
}
