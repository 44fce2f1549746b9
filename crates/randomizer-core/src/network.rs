//! Random network and hardware addresses.
//!
//! Thin consumers of [`WordRng::fill`]: each generator fills the address
//! buffer with random bytes and then overwrites whatever bits the address
//! family reserves. Prefix layouts follow RFC 4291 (IPv6 addressing
//! architecture) and IEEE 802 for the MAC U/L and I/G bits.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::rng::WordRng;

/// IPv6 unicast address kind (RFC 4291 §2.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnicastKind {
    /// Global unicast, `2000::/3`.
    Global,
    /// Link-local, `FE80::/10`.
    LinkLocal,
    /// Site-local, `FEC0::/10` (deprecated on the wire, still generable).
    SiteLocal,
    /// Unique local, `FD00::/8`.
    UniqueLocal,
}

impl UnicastKind {
    /// Alias kept from the original surface: "private" means unique local.
    pub const PRIVATE: Self = Self::UniqueLocal;
}

/// IPv6 multicast scope nibble (RFC 4291 §2.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MulticastScope {
    /// Interface-local scope.
    InterfaceLocal = 0x1,
    /// Link-local scope.
    LinkLocal = 0x2,
    /// Admin-local scope.
    AdminLocal = 0x4,
    /// Site-local scope.
    SiteLocal = 0x5,
    /// Organization-local scope.
    OrgLocal = 0x8,
    /// Global scope.
    Global = 0xE,
}

impl MulticastScope {
    /// The scope value as a 4-bit nibble.
    pub const fn nibble(self) -> u8 {
        self as u8 & 0x0F
    }
}

/// A 6-byte IEEE 802 MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    /// The six octets.
    pub const fn octets(self) -> [u8; 6] {
        self.0
    }

    /// Borrow the octets as a byte slice.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether the U/L bit marks this address locally administered.
    pub const fn is_local(self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Whether the I/G bit marks this address multicast.
    pub const fn is_multicast(self) -> bool {
        self.0[0] & 0x01 != 0
    }
}

impl std::fmt::Display for MacAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl From<MacAddr> for [u8; 6] {
    fn from(mac: MacAddr) -> Self {
        mac.0
    }
}

fn random_bytes<const N: usize>() -> [u8; N] {
    let mut b = [0u8; N];
    let mut rng = WordRng::new();
    rng.fill(&mut b);
    b
}

/// Random IPv4 address (4 random bytes, no masking).
pub fn ipv4_addr() -> Ipv4Addr {
    Ipv4Addr::from(random_bytes::<4>())
}

/// Random IPv6 address (16 random bytes, no masking).
pub fn ipv6_addr() -> Ipv6Addr {
    Ipv6Addr::from(random_bytes::<16>())
}

/// Random MAC address with the U/L and I/G bits forced.
///
/// `local` sets or clears bit `0x02` of the first octet (locally
/// administered vs. universally administered); `multicast` sets or clears
/// bit `0x01` (group vs. individual).
pub fn mac_addr(local: bool, multicast: bool) -> MacAddr {
    let mut b = random_bytes::<6>();
    if local {
        b[0] |= 0x02;
    } else {
        b[0] &= !0x02;
    }
    if multicast {
        b[0] |= 0x01;
    } else {
        b[0] &= !0x01;
    }
    MacAddr(b)
}

/// Random IPv6 unicast address with the prefix bits of `kind` overwritten.
pub fn ipv6_unicast_addr(kind: UnicastKind) -> Ipv6Addr {
    let mut b = random_bytes::<16>();
    match kind {
        UnicastKind::Global => {
            b[0] = (b[0] & 0x1F) | 0x20;
        }
        UnicastKind::LinkLocal => {
            b[0] = 0xFE;
            b[1] = (b[1] & 0x3F) | 0x80;
        }
        UnicastKind::SiteLocal => {
            b[0] = 0xFE;
            b[1] = (b[1] & 0x3F) | 0xC0;
        }
        UnicastKind::UniqueLocal => {
            b[0] = 0xFD;
        }
    }
    Ipv6Addr::from(b)
}

/// Random IPv6 multicast address in the given scope.
///
/// The first octet becomes `0xFF`; the second carries the scope nibble with
/// the flag nibble zeroed.
pub fn ipv6_multicast_addr(scope: MulticastScope) -> Ipv6Addr {
    let mut b = random_bytes::<16>();
    b[0] = 0xFF;
    b[1] = scope.nibble();
    Ipv6Addr::from(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_addr_shape() {
        let ip = ipv4_addr();
        assert_eq!(ip.octets().len(), 4);
    }

    #[test]
    fn test_ipv6_addr_shape() {
        let ip = ipv6_addr();
        assert_eq!(ip.octets().len(), 16);
    }

    #[test]
    fn test_addresses_vary() {
        let first = ipv6_addr();
        assert!((0..64).any(|_| ipv6_addr() != first));
    }

    #[test]
    fn test_mac_addr_bits() {
        for local in [false, true] {
            for multicast in [false, true] {
                let mac = mac_addr(local, multicast);
                assert_eq!(mac.octets().len(), 6);
                assert_eq!(mac.is_local(), local, "U/L bit mismatch: {mac}");
                assert_eq!(mac.is_multicast(), multicast, "I/G bit mismatch: {mac}");
            }
        }
    }

    #[test]
    fn test_mac_display_format() {
        let mac = mac_addr(true, false);
        let s = mac.to_string();
        assert_eq!(s.len(), 17);
        assert_eq!(s.matches(':').count(), 5);
    }

    #[test]
    fn test_ipv6_unicast_global_prefix() {
        for _ in 0..32 {
            let b = ipv6_unicast_addr(UnicastKind::Global).octets();
            assert_eq!(b[0] & 0xE0, 0x20, "top 3 bits must be 001");
        }
    }

    #[test]
    fn test_ipv6_unicast_link_local_prefix() {
        for _ in 0..32 {
            let b = ipv6_unicast_addr(UnicastKind::LinkLocal).octets();
            assert_eq!(b[0], 0xFE);
            assert_eq!(b[1] & 0xC0, 0x80);
        }
    }

    #[test]
    fn test_ipv6_unicast_site_local_prefix() {
        for _ in 0..32 {
            let b = ipv6_unicast_addr(UnicastKind::SiteLocal).octets();
            assert_eq!(b[0], 0xFE);
            assert_eq!(b[1] & 0xC0, 0xC0);
        }
    }

    #[test]
    fn test_ipv6_unicast_unique_local_prefix() {
        for _ in 0..32 {
            let b = ipv6_unicast_addr(UnicastKind::UniqueLocal).octets();
            assert_eq!(b[0], 0xFD);
        }
    }

    #[test]
    fn test_private_alias() {
        assert_eq!(UnicastKind::PRIVATE, UnicastKind::UniqueLocal);
    }

    #[test]
    fn test_ipv6_multicast_scopes() {
        let scopes = [
            MulticastScope::InterfaceLocal,
            MulticastScope::LinkLocal,
            MulticastScope::AdminLocal,
            MulticastScope::SiteLocal,
            MulticastScope::OrgLocal,
            MulticastScope::Global,
        ];
        for scope in scopes {
            let b = ipv6_multicast_addr(scope).octets();
            assert_eq!(b[0], 0xFF);
            assert_eq!(b[1] & 0x0F, scope.nibble());
            assert_eq!(b[1] & 0xF0, 0, "flag nibble must be zero");
        }
    }
}
