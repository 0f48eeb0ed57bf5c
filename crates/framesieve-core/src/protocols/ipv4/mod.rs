//! IPv4 network layer.
//!
//! Validation checks the version, the header length (IHL), the declared
//! total length against the captured bytes, and the header checksum
//! including options. The payload ends at the declared total length, so
//! Ethernet padding never reaches the transport layer.

pub mod layout;
pub mod parser;
pub mod reader;

pub use layout::Ipv4Header;
