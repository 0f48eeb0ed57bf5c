//! Protocol definitions plugged into the decode engine.
//!
//! Each protocol follows a layered structure:
//! - `layout`: header struct, sizes and protocol constants (source of truth)
//! - `reader`: typed accessors and setters over the raw header fields
//! - `parser`: validation, payload bounds and encapsulation rules
//!
//! Headers are read in place; nothing here copies packet bytes. Parsers are
//! pure and contain no I/O.

pub mod arp;
pub(crate) mod common;
pub mod ethernet;
pub mod icmp;
pub mod ipv4;
pub mod ipv6;
pub mod udp;

pub use common::checksum::{InternetChecksum, internet_checksum};
