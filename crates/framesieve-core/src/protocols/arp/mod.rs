//! ARP for IPv4 over Ethernet.
//!
//! Only the Ethernet/IPv4 flavour (28-byte packet) is decoded; other
//! hardware or protocol address types fail validation.

pub mod layout;
pub mod parser;
pub mod reader;

pub use layout::ArpHeader;
