//! Classification of message text as an IP address.
//!
//! The router only triggers a lookup when an entire message is one address,
//! so classification is strict: no trimming, no substring matching, no DNS.

use std::net::{Ipv4Addr, Ipv6Addr};

/// Outcome of classifying an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    /// The whole input is a valid dotted-decimal IPv4 address.
    Ipv4,
    /// The whole input is a valid IPv6 address in standard textual notation.
    Ipv6,
    /// Anything else, including addresses embedded in longer text.
    NotAnAddress,
}

/// Classifies an input string as IPv4, IPv6, or not an address at all.
///
/// The entire string must parse; partial matches never classify. IPv4 is
/// strict dotted-decimal (four octets, 0-255, no leading zeros), IPv6 covers
/// the standard notations including `::` compression and IPv4-mapped forms.
/// Pure function, no I/O.
///
/// # Examples
///
/// ```
/// use ipscout::ip::{classify, AddressClass};
/// assert_eq!(classify("8.8.8.8"), AddressClass::Ipv4);
/// assert_eq!(classify("2001:4860:4860::8888"), AddressClass::Ipv6);
/// assert_eq!(classify("my ip is 8.8.8.8"), AddressClass::NotAnAddress);
/// ```
#[must_use]
pub fn classify(input: &str) -> AddressClass {
    if input.parse::<Ipv4Addr>().is_ok() {
        return AddressClass::Ipv4;
    }
    if input.parse::<Ipv6Addr>().is_ok() {
        return AddressClass::Ipv6;
    }
    AddressClass::NotAnAddress
}
