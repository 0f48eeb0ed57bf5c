//! ICMP for IPv4.
//!
//! The checksum covers the whole message, so only unfragmented datagrams
//! are decoded.

pub mod layout;
pub mod parser;
pub mod reader;

pub use layout::IcmpHeader;
