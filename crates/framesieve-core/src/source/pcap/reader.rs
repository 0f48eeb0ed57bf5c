use std::io::{Read, Seek, SeekFrom};

use pcap_parser::Linktype;

use super::error::PcapSourceError;
use super::layout;

/// What the source remembers about one PCAPNG interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceInfo {
    pub linktype: Linktype,
    pub ts_units_per_second: u64,
    /// Largest number of bytes captured per packet; 0 means unlimited.
    pub snaplen: u32,
}

impl Default for InterfaceInfo {
    fn default() -> Self {
        Self {
            linktype: Linktype::ETHERNET,
            ts_units_per_second: layout::DEFAULT_TS_UNITS_PER_SECOND,
            snaplen: 0,
        }
    }
}

/// Read the magic bytes and rewind the reader to the start.
///
/// # Errors
/// Returns `PcapSourceError::Io` when the reader is shorter than four bytes
/// or cannot be rewound.
pub fn read_magic_and_rewind<R: Read + Seek>(reader: &mut R) -> Result<[u8; 4], PcapSourceError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(magic)
}

pub fn is_pcapng_magic(magic: &[u8; 4]) -> bool {
    magic == &layout::PCAPNG_MAGIC
}

/// Interface settings for `if_id`; unknown interfaces fall back to Ethernet
/// with microsecond timestamps.
pub fn interface_for(interfaces: &[InterfaceInfo], if_id: u32) -> InterfaceInfo {
    usize::try_from(if_id)
        .ok()
        .and_then(|index| interfaces.get(index))
        .copied()
        .unwrap_or_default()
}

/// Decode an `if_tsresol` value into timestamp units per second.
///
/// The high bit selects a power of two, otherwise a power of ten. Returns
/// `None` for resolutions that do not fit in a `u64`.
pub fn ts_units_per_second(if_tsresol: u8) -> Option<u64> {
    let exponent = u32::from(if_tsresol & 0x7f);
    if if_tsresol & 0x80 != 0 {
        1u64.checked_shl(exponent)
    } else {
        10u64.checked_pow(exponent)
    }
}

/// Convert a PCAPNG 64-bit timestamp to seconds.
pub fn pcapng_ts_to_seconds(ts_high: u32, ts_low: u32, units_per_second: u64) -> f64 {
    let ts = (u64::from(ts_high) << 32) | u64::from(ts_low);
    ts as f64 / units_per_second as f64
}

/// Convert a legacy PCAP timestamp to seconds.
pub fn legacy_ts_to_seconds(ts_sec: u32, ts_fraction: u32, nanosecond: bool) -> f64 {
    let scale = if nanosecond {
        layout::NANOS_PER_SECOND
    } else {
        layout::MICROS_PER_SECOND
    };
    f64::from(ts_sec) + f64::from(ts_fraction) / scale
}

/// Clip captured data to the length recorded in the block, dropping the
/// 32-bit block padding.
pub fn captured_data(data: &[u8], captured_len: u32) -> &[u8] {
    let len = usize::try_from(captured_len).unwrap_or(usize::MAX);
    &data[..len.min(data.len())]
}

/// Captured length of a simple packet block.
///
/// The block records only the original length; the interface snaplen
/// bounds what was actually written.
pub fn simple_packet_len(origlen: u32, snaplen: u32) -> u32 {
    if snaplen == 0 {
        origlen
    } else {
        origlen.min(snaplen)
    }
}
