//! Ethernet II link layer.
//!
//! The header carries no checksum or version field, so any 14 bytes form a
//! valid frame; the ethertype selects the network layer.

pub mod layout;
pub mod parser;
pub mod reader;

pub use layout::EthernetHeader;
