//! Domain models for subnet calculations.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the mask bit math
//! - [`SubnetResult`] - everything derived from one CIDR expression
//! - [`CidrInput`] and [`AddressCounts`] - intermediate values

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, get_cidr_mask, mask_addr, network_addr, num_addresses, num_usable, Ipv4,
    MAX_LENGTH, MAX_OCTET,
};
pub use subnet::{AddressCounts, CidrInput, SubnetResult};
