//! PCAP and PCAPNG file source.
//!
//! The container format is picked from the file magic. Legacy files carry
//! one linktype in the global header; PCAPNG files carry one per interface
//! and may change timestamp resolution per interface.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::PcapFileSource;
