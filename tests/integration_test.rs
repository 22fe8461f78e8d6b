//! Integration tests for subnet-visualizer
//!
//! These tests drive the public API the way a UI shell would.

use std::net::Ipv4Addr;
use subnet_visualizer::{
    calculate, calculate_parts, derive_mask, try_calculate, Ipv4, SubnetError, SubnetResult,
};

fn expect(cidr: &str) -> SubnetResult {
    calculate(cidr).unwrap_or_else(|| panic!("{cidr} should be valid"))
}

#[test]
fn test_class_c_scenario() {
    let r = expect("192.168.1.0/24");
    assert_eq!(r.mask.to_string(), "255.255.255.0");
    assert_eq!(r.network.to_string(), "192.168.1.0");
    assert_eq!(r.broadcast.to_string(), "192.168.1.255");
    assert_eq!(r.total_addresses, 256);
    assert_eq!(r.usable_addresses, 254);
}

#[test]
fn test_class_a_scenario() {
    let r = expect("10.0.0.5/8");
    assert_eq!(r.mask.to_string(), "255.0.0.0");
    assert_eq!(r.network.to_string(), "10.0.0.0");
    assert_eq!(r.broadcast.to_string(), "10.255.255.255");
    assert_eq!(r.total_addresses, 16777216);
    assert_eq!(r.usable_addresses, 16777214);
}

#[test]
fn test_host_route_scenario() {
    let r = expect("192.168.1.1/32");
    assert_eq!(r.network, Ipv4Addr::new(192, 168, 1, 1));
    assert_eq!(r.broadcast, Ipv4Addr::new(192, 168, 1, 1));
    assert_eq!(r.total_addresses, 1);
    assert_eq!(r.usable_addresses, 0);
}

#[test]
fn test_default_route_scenario() {
    let r = expect("0.0.0.0/0");
    assert_eq!(r.mask.to_string(), "0.0.0.0");
    assert_eq!(r.network.to_string(), "0.0.0.0");
    assert_eq!(r.broadcast.to_string(), "255.255.255.255");
    assert_eq!(r.total_addresses, 4294967296);
}

#[test]
fn test_invalid_scenarios() {
    assert!(calculate("999.1.1.1/24").is_none());
    assert!(calculate("10.0.0.1/33").is_none());
    assert!(matches!(
        try_calculate("999.1.1.1/24"),
        Err(SubnetError::Range { value: 999, .. })
    ));
}

#[test]
fn test_every_prefix() {
    let ip = Ipv4Addr::new(203, 0, 113, 77);
    for p in 0..=32u8 {
        let r = expect(&format!("{ip}/{p}"));
        let mask = u32::from(derive_mask(p).unwrap());
        assert_eq!(u32::from(r.mask), mask);
        assert_eq!(mask.leading_ones(), p as u32);
        assert_eq!(u32::from(r.network) & !mask, 0, "/{p} network host bits");
        assert_eq!(u32::from(r.broadcast) & !mask, !mask, "/{p} broadcast host bits");
        assert!(r.network <= ip && ip <= r.broadcast);
        assert_eq!(r.total_addresses, 1u64 << (32 - p));
        assert_eq!(r.usable_addresses, r.total_addresses.saturating_sub(2));
    }
}

#[test]
fn test_parts_match_text() {
    assert_eq!(calculate_parts([10, 0, 0, 5], 8), calculate("10.0.0.5/8"));
    assert!(calculate_parts([10, 0, 0, 5], 33).is_none());
}

#[test]
fn test_idempotent() {
    let first = calculate("100.64.12.9/10");
    assert!(first.is_some());
    assert_eq!(first, calculate("100.64.12.9/10"));
}

#[test]
fn test_json_shape() {
    let r = expect("172.16.5.4/12");
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"network\":\"172.16.0.0\""));
    assert!(json.contains("\"broadcast\":\"172.31.255.255\""));
    assert!(json.contains("\"usableAddresses\":1048574"));
    assert!(json.contains("\"totalAddresses\":1048576"));
}

#[test]
fn test_network_cidr() {
    let r = expect("172.16.5.4/12");
    let net: Ipv4 = "172.16.0.0/12".parse().unwrap();
    assert_eq!(r.network_cidr(), net);
    assert!(net.contains(r.ip));
}
