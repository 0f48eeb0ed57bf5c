//! framesieve core library: layered, zero-copy packet dissection.
//!
//! The crate is split into an engine and its users:
//! - [`frame`]: typed header overlays, size checks and validation
//! - [`filter`]: decode stages wired into a tree, with ordered callbacks
//! - [`protocols`]: Ethernet, ARP, IPv4, IPv6, ICMP and UDP definitions
//! - capture sources and an offline analysis producing a JSON report
//!
//! Decoding never copies packet bytes and never fails loudly: a frame that
//! is too small, invalid, or not carried by its parent simply stops at the
//! stage that rejected it. All I/O is isolated in the capture source.
//!
//! # Examples
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! use framesieve_core::protocols::ethernet::EthernetHeader;
//! use framesieve_core::protocols::ipv4::Ipv4Header;
//! use framesieve_core::protocols::udp::UdpHeader;
//! use framesieve_core::{DecodeStage, RootFilter};
//!
//! let bytes = Arc::new(AtomicU64::new(0));
//! let mut ethernet = RootFilter::<EthernetHeader>::new();
//! ethernet.chain::<Ipv4Header>(|ipv4| {
//!     ipv4.chain::<UdpHeader>(|udp| {
//!         let bytes = Arc::clone(&bytes);
//!         udp.add_callback(move |datagram| {
//!             bytes.fetch_add(datagram.payload().len() as u64, Ordering::Relaxed);
//!         });
//!     });
//! });
//!
//! // Too short for an Ethernet header: dropped at the root.
//! assert!(!ethernet.parse(&[0u8; 6]).is_dispatched());
//! assert_eq!(bytes.load(Ordering::Relaxed), 0);
//! ```
//!
//! Offline analysis of a capture file:
//! ```no_run
//! use std::path::Path;
//!
//! use framesieve_core::dissect_pcap_file;
//!
//! let report = dissect_pcap_file(Path::new("capture.pcapng"))?;
//! for layer in &report.layers {
//!     println!("{}: {}", layer.layer, layer.frames);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod filter;
pub mod frame;
pub mod protocols;

mod analysis;
mod source;

pub use analysis::{AnalysisError, dissect_pcap_file, dissect_source};
pub use filter::{BaseFilter, Callback, ChainedFilter, DecodeStage, Outcome, RootFilter};
pub use frame::{
    CheckFrame, Frame, FrameMut, FrameRef, ParentMatch, ParseError, frame_cast, frame_cast_mut,
    frame_parse, frame_parse_mut,
};
pub use source::{PacketEvent, PacketSource, PcapFileSource, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when no capture time is available.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Dissection report with deterministic ordering.
///
/// # Examples
/// ```
/// use framesieve_core::make_stub_report;
///
/// let report = make_stub_report("capture.pcapng", 123);
/// assert_eq!(report.report_version, framesieve_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp of the last captured packet, or the epoch.
    pub generated_at: String,

    /// Input capture metadata.
    pub input: InputInfo,

    /// Optional capture summary (may be empty when unavailable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_summary: Option<CaptureSummary>,
    /// Decoded frames per protocol layer, link layer first.
    pub layers: Vec<LayerSummary>,
    /// Ethernet frames per ethertype, ascending.
    pub ethertypes: Vec<EthertypeSummary>,
    /// Packets whose link type has no decode tree.
    pub unsupported_linktypes: u64,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "framesieve").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input capture metadata embedded in reports.
///
/// # Examples
/// ```
/// use framesieve_core::InputInfo;
///
/// let input = InputInfo {
///     path: "capture.pcapng".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the dissector.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Basic capture summary (timestamps may be absent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSummary {
    /// Total packet count observed in the capture.
    pub packets_total: u64,
    /// RFC3339 timestamp of the first packet (if known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    /// RFC3339 timestamp of the last packet (if known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
}

/// Frame count for one protocol layer.
///
/// A frame is counted once it was decoded and validated; layers that saw no
/// frame are still listed with a zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSummary {
    /// Layer name (e.g., "ipv4", "udp").
    pub layer: String,
    /// Number of frames decoded at this layer.
    pub frames: u64,
}

/// Frame count for one Ethernet ethertype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthertypeSummary {
    pub ethertype: u16,
    pub frames: u64,
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use framesieve_core::make_stub_report;
///
/// let report = make_stub_report("capture.pcapng", 123);
/// assert_eq!(report.tool.name, "framesieve");
/// assert!(report.layers.is_empty());
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "framesieve".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        capture_summary: None,
        layers: vec![],
        ethertypes: vec![],
        unsupported_linktypes: 0,
    }
}
