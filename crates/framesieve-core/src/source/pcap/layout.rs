/// Initial buffer size handed to the pcap-parser readers.
pub const PCAP_READER_BUFFER_SIZE: usize = 64 * 1024;

/// Section header block type, the first four bytes of a PCAPNG file.
pub const PCAPNG_MAGIC: [u8; 4] = [0x0a, 0x0d, 0x0d, 0x0a];

/// Timestamp units per second when an interface declares no `if_tsresol`.
pub const DEFAULT_TS_UNITS_PER_SECOND: u64 = 1_000_000;

pub const MICROS_PER_SECOND: f64 = 1e6;
pub const NANOS_PER_SECOND: f64 = 1e9;
