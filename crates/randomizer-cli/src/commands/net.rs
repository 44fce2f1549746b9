use randomizer_core::{MulticastScope, UnicastKind, WordRng, network};
use serde_json::json;

use super::emit;

pub fn run_ipv4(count: usize, json: bool) {
    for _ in 0..count {
        emit(json!(network::ipv4_addr().to_string()), json);
    }
}

pub fn run_ipv6(unicast: Option<&str>, multicast: Option<&str>, count: usize, json: bool) {
    for _ in 0..count {
        let ip = match (unicast, multicast) {
            (Some(kind), _) => network::ipv6_unicast_addr(parse_unicast(kind)),
            (None, Some(scope)) => network::ipv6_multicast_addr(parse_scope(scope)),
            (None, None) => network::ipv6_addr(),
        };
        emit(json!(ip.to_string()), json);
    }
}

pub fn run_mac(local: bool, multicast: bool, count: usize, json: bool) {
    for _ in 0..count {
        emit(json!(network::mac_addr(local, multicast).to_string()), json);
    }
}

pub fn run_bytes(n: usize, count: usize, json: bool) {
    for _ in 0..count {
        let mut buf = vec![0u8; n];
        WordRng::new().fill(&mut buf);
        let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
        emit(json!(hex), json);
    }
}

fn parse_unicast(kind: &str) -> UnicastKind {
    match kind {
        "link-local" => UnicastKind::LinkLocal,
        "site-local" => UnicastKind::SiteLocal,
        "unique-local" => UnicastKind::UniqueLocal,
        _ => UnicastKind::Global,
    }
}

fn parse_scope(scope: &str) -> MulticastScope {
    match scope {
        "interface-local" => MulticastScope::InterfaceLocal,
        "link-local" => MulticastScope::LinkLocal,
        "admin-local" => MulticastScope::AdminLocal,
        "site-local" => MulticastScope::SiteLocal,
        "org-local" => MulticastScope::OrgLocal,
        _ => MulticastScope::Global,
    }
}
