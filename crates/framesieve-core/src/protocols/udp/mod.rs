//! UDP transport layer, over IPv4 and IPv6.
//!
//! The datagram length must fit the captured bytes. The checksum depends
//! on the IP pseudo-header and is not verified.

pub mod layout;
pub mod parser;
pub mod reader;

pub use layout::UdpHeader;
