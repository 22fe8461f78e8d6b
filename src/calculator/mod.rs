//! Subnet calculator.
//!
//! Pure functions from CIDR text (or separate octets and prefix) to a
//! [`SubnetResult`]:
//! - [`parse`] - shape check, `a.b.c.d/p`
//! - [`validate`] / [`check`] - octets in 0-255, prefix in 0-32
//! - [`derive_mask`], [`network_address`], [`broadcast_address`],
//!   [`address_counts`] - the arithmetic
//! - [`calculate`] - all of the above, `None` on invalid input

mod parse;
mod validate;

pub use parse::parse;
pub use validate::{check, validate};

use crate::error::Result;
use crate::models::{
    broadcast_addr, mask_addr, network_addr, num_addresses, num_usable, AddressCounts, CidrInput,
    Ipv4, SubnetResult,
};
use std::net::Ipv4Addr;

/// Subnet mask with the top `prefix` bits set.
pub fn derive_mask(prefix: u8) -> Result<Ipv4Addr> {
    mask_addr(prefix)
}

/// `ip` AND `mask`.
pub fn network_address(ip: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    network_addr(ip, mask)
}

/// `network` OR NOT `mask`.
pub fn broadcast_address(network: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    broadcast_addr(network, mask)
}

/// `total = 2^(32-prefix)`, `usable = max(total-2, 0)`.
pub fn address_counts(prefix: u8) -> Result<AddressCounts> {
    Ok(AddressCounts {
        total: num_addresses(prefix)?,
        usable: num_usable(prefix)?,
    })
}

fn derive(cidr: Ipv4) -> Result<SubnetResult> {
    let mask = derive_mask(cidr.mask)?;
    let network = network_address(cidr.addr, mask);
    let broadcast = broadcast_address(network, mask);
    let counts = address_counts(cidr.mask)?;

    let result = SubnetResult {
        ip: cidr.addr,
        mask,
        network,
        broadcast,
        prefix: cidr.mask,
        total_addresses: counts.total,
        usable_addresses: counts.usable,
    };
    log::debug!(
        "calculate({cidr}) network={} broadcast={} total={}",
        result.network,
        result.broadcast,
        result.total_addresses
    );
    Ok(result)
}

/// Full calculation, keeping the reason for a rejection.
pub fn try_calculate(cidr_text: &str) -> Result<SubnetResult> {
    let input = parse(cidr_text)?;
    let cidr = check(&input)?;
    derive(cidr)
}

/// Full calculation from separately entered octets and prefix.
pub fn try_calculate_parts(octets: [u32; 4], prefix: u32) -> Result<SubnetResult> {
    let cidr = check(&CidrInput { octets, prefix })?;
    derive(cidr)
}

/// Full calculation; `None` means the input was not a valid IPv4 CIDR.
///
/// # Examples
/// ```
/// use subnet_visualizer::calculate;
/// let r = calculate("192.168.1.0/24").unwrap();
/// assert_eq!(r.usable_addresses, 254);
/// assert!(calculate("10.0.0.1/33").is_none());
/// ```
pub fn calculate(cidr_text: &str) -> Option<SubnetResult> {
    try_calculate(cidr_text)
        .map_err(|e| log::warn!("Rejected input: {e}"))
        .ok()
}

/// Same as [`calculate`] for four octet fields and a prefix field.
pub fn calculate_parts(octets: [u32; 4], prefix: u32) -> Option<SubnetResult> {
    try_calculate_parts(octets, prefix)
        .map_err(|e| log::warn!("Rejected input: {e}"))
        .ok()
}
