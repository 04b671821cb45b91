#![deny(missing_docs)]
//! ipscout library.
//!
//! A Telegram bot that geolocates IP addresses: it watches chat messages,
//! recognizes the ones that are exactly an IPv4 or IPv6 address, queries a
//! geolocation provider, and replies with a formatted summary. Everything
//! else, apart from the help commands, is ignored without a reply.

/// Telegram transport, routing, and reply rendering
pub mod bot;
/// Configuration management
pub mod config;
/// IP geolocation lookup client and types
pub mod geo;
/// Classification of message text as an IP address
pub mod ip;
/// Text sanitizing and formatting helpers
pub mod utils;
