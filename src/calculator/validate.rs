//! Range checks on parsed numbers.

use crate::error::{Result, SubnetError};
use crate::models::{CidrInput, Ipv4, MAX_LENGTH, MAX_OCTET};
use std::net::Ipv4Addr;

const OCTET_NAMES: [&str; 4] = ["first octet", "second octet", "third octet", "fourth octet"];

/// True iff every octet is in 0-255 and the prefix is in 0-32.
pub fn validate(input: &CidrInput) -> bool {
    check(input).is_ok()
}

/// Range check that reports the first offending field.
pub fn check(input: &CidrInput) -> Result<Ipv4> {
    for (&name, &value) in OCTET_NAMES.iter().zip(input.octets.iter()) {
        if value > MAX_OCTET {
            return Err(SubnetError::Range {
                field: name,
                value,
                max: MAX_OCTET,
            });
        }
    }
    if input.prefix > MAX_LENGTH as u32 {
        return Err(SubnetError::Range {
            field: "prefix",
            value: input.prefix,
            max: MAX_LENGTH as u32,
        });
    }

    let [a, b, c, d] = input.octets.map(|o| o as u8);
    Ok(Ipv4 {
        addr: Ipv4Addr::new(a, b, c, d),
        mask: input.prefix as u8,
    })
}
