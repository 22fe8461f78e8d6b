//! CIDR text to raw numbers.

use crate::error::{Result, SubnetError};
use crate::models::CidrInput;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Four 1-3 digit groups, a slash, a 1-2 digit prefix. ASCII digits only.
    static ref CIDR_RE: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})/([0-9]{1,2})$")
            .expect("Invalid Regex?");
}

/// Split `a.b.c.d/p` into its numbers.
///
/// Surrounding whitespace is ignored. Only the shape is checked here, so
/// `999.1.1.1/24` parses fine and is left for [`super::validate`] to reject.
pub fn parse(cidr_text: &str) -> Result<CidrInput> {
    let input = cidr_text.trim();
    let caps = CIDR_RE.captures(input).ok_or_else(|| SubnetError::Format {
        input: input.to_string(),
    })?;

    let num = |i: usize| -> Result<u32> {
        caps[i].parse::<u32>().map_err(|_| SubnetError::Format {
            input: input.to_string(),
        })
    };

    let parsed = CidrInput {
        octets: [num(1)?, num(2)?, num(3)?, num(4)?],
        prefix: num(5)?,
    };
    log::trace!("parse({input}) -> {parsed:?}");
    Ok(parsed)
}
