//! Origin-lookup label codecs.
//!
//! The Team Cymru IP-to-ASN service encodes the queried address into the
//! hostname itself: a reversed dotted-octet label for IPv4 and a reversed
//! dotted-nibble label for IPv6. These codecs are one-directional: they
//! only build lookup labels, never parse them back.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error_handling::NotIpv6Error;

/// Builds the origin-lookup label for an IPv4 address.
///
/// The four decimal octets are joined by `.` in reverse order, so `1.2.3.4`
/// encodes to `4.3.2.1`.
pub fn ipv4_origin_label(addr: Ipv4Addr) -> String {
    let o = addr.octets();
    format!("{}.{}.{}.{}", o[3], o[2], o[1], o[0])
}

/// Renders an IPv6 address in fully expanded form.
///
/// Produces 8 lowercase hex groups of 4 nibbles each joined by `:`, with no
/// zero compression, e.g. `2001:db8::1` becomes
/// `2001:0db8:0000:0000:0000:0000:0000:0001`.
///
/// # Errors
///
/// Returns [`NotIpv6Error`] for IPv4-mapped addresses (`::ffff:a.b.c.d`);
/// those are IPv4 addresses and have no IPv6 ASN-origin meaning.
pub fn uncompressed_ipv6(addr: Ipv6Addr) -> Result<String, NotIpv6Error> {
    let octets = addr.octets();
    if octets[..10].iter().all(|&b| b == 0) && octets[10] == 0xff && octets[11] == 0xff {
        return Err(NotIpv6Error(addr));
    }

    let groups: Vec<String> = addr.segments().iter().map(|s| format!("{s:04x}")).collect();
    Ok(groups.join(":"))
}

/// Builds the origin-lookup label for an IPv6 address.
///
/// The expanded address is stripped of its colons (leaving 32 nibble
/// characters), the character order is reversed, and every character is
/// joined with `.`.
///
/// # Errors
///
/// Returns [`NotIpv6Error`] for IPv4-mapped addresses.
pub fn ipv6_origin_label(addr: Ipv6Addr) -> Result<String, NotIpv6Error> {
    let expanded = uncompressed_ipv6(addr)?;
    let nibbles = expanded.replace(':', "");
    let label: Vec<String> = nibbles.chars().rev().map(String::from).collect();
    Ok(label.join("."))
}
