//! Capture sources feeding the dissection pipeline.
//!
//! All file I/O lives here. A source yields owned [`PacketEvent`]s one at a
//! time; decoding never touches the file.

mod pcap;

pub use pcap::PcapFileSource;

use pcap_parser::Linktype;
use thiserror::Error;

/// One captured packet.
#[derive(Debug, Clone)]
pub struct PacketEvent {
    /// Capture time in seconds since the Unix epoch, when the format records
    /// one.
    pub ts: Option<f64>,
    /// Link layer of `data`. Defaults to Ethernet when the capture does not
    /// say.
    pub linktype: Linktype,
    /// Captured bytes, starting at the link-layer header.
    pub data: Vec<u8>,
}

/// Pull-based packet iterator over a capture.
pub trait PacketSource {
    /// Next packet, or `None` once the capture is exhausted.
    fn next_packet(&mut self) -> Result<Option<PacketEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PCAP parse error: {0}")]
    Pcap(String),
}

impl From<pcap::error::PcapSourceError> for SourceError {
    fn from(value: pcap::error::PcapSourceError) -> Self {
        match value {
            pcap::error::PcapSourceError::Io(err) => SourceError::Io(err),
            err @ pcap::error::PcapSourceError::Pcap { .. } => SourceError::Pcap(err.to_string()),
        }
    }
}
