//! IPv4 subnet calculator.
//!
//! Derives mask, network, broadcast and address counts from a CIDR expression
//! such as `192.168.1.0/24`. Invalid input yields `None` from [`calculate`];
//! [`try_calculate`] returns the reason instead.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use calculator::{
    address_counts, broadcast_address, calculate, calculate_parts, derive_mask, network_address,
    parse, try_calculate, try_calculate_parts, validate,
};
pub use error::SubnetError;
pub use models::{AddressCounts, CidrInput, Ipv4, SubnetResult};
