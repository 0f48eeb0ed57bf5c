//! IPv6 network layer.
//!
//! Only the fixed 40-byte header is decoded. Extension headers are left in
//! the payload; a stage chained under IPv6 matches on the fixed header's
//! next-header value only.

pub mod layout;
pub mod parser;
pub mod reader;

pub use layout::Ipv6Header;
