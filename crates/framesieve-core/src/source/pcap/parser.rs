use std::fs::File;
use std::path::Path;

use pcap_parser::traits::PcapReaderIterator;
use pcap_parser::{Block, LegacyPcapReader, Linktype, PcapBlockOwned, PcapError, PcapNGReader};
use tracing::debug;

use super::error::PcapSourceError;
use super::layout;
use super::reader::{
    InterfaceInfo, captured_data, interface_for, is_pcapng_magic, legacy_ts_to_seconds,
    pcapng_ts_to_seconds, read_magic_and_rewind, simple_packet_len, ts_units_per_second,
};
use crate::source::{PacketEvent, PacketSource, SourceError};

/// Packet source reading a PCAP or PCAPNG file.
pub struct PcapFileSource {
    inner: PcapReader,
}

enum PcapReader {
    Legacy {
        reader: LegacyPcapReader<File>,
        linktype: Linktype,
        nanosecond: bool,
    },
    Ng {
        reader: PcapNGReader<File>,
        interfaces: Vec<InterfaceInfo>,
    },
}

impl PcapFileSource {
    /// Open `path` and detect its container format.
    ///
    /// # Errors
    /// Returns `SourceError::Io` when the file cannot be opened or holds
    /// fewer than four bytes, and `SourceError::Pcap` when the header is not
    /// a PCAP or PCAPNG header.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        let inner = create_reader(file)?;
        Ok(Self { inner })
    }
}

impl PacketSource for PcapFileSource {
    fn next_packet(&mut self) -> Result<Option<PacketEvent>, SourceError> {
        let event = match &mut self.inner {
            PcapReader::Legacy {
                reader,
                linktype,
                nanosecond,
            } => next_event(reader, "pcap", |block| match block {
                PcapBlockOwned::LegacyHeader(header) => {
                    *linktype = header.network;
                    *nanosecond = header.is_nanosecond_precision();
                    None
                }
                PcapBlockOwned::Legacy(packet) => Some(PacketEvent {
                    ts: Some(legacy_ts_to_seconds(packet.ts_sec, packet.ts_usec, *nanosecond)),
                    linktype: *linktype,
                    data: captured_data(packet.data, packet.caplen).to_vec(),
                }),
                _ => None,
            })?,
            PcapReader::Ng { reader, interfaces } => {
                next_event(reader, "pcapng", |block| ng_block(interfaces, block))?
            }
        };
        Ok(event)
    }
}

fn create_reader(mut file: File) -> Result<PcapReader, PcapSourceError> {
    let magic = read_magic_and_rewind(&mut file)?;

    if is_pcapng_magic(&magic) {
        let reader = PcapNGReader::new(layout::PCAP_READER_BUFFER_SIZE, file)
            .map_err(|e| PcapSourceError::pcap("pcapng reader init", e))?;
        Ok(PcapReader::Ng {
            reader,
            interfaces: Vec::new(),
        })
    } else {
        let reader = LegacyPcapReader::new(layout::PCAP_READER_BUFFER_SIZE, file)
            .map_err(|e| PcapSourceError::pcap("pcap reader init", e))?;
        Ok(PcapReader::Legacy {
            reader,
            linktype: Linktype::ETHERNET,
            nanosecond: false,
        })
    }
}

/// Pull blocks until `on_block` turns one into a packet or the file ends.
fn next_event<R, F>(
    reader: &mut R,
    format: &'static str,
    mut on_block: F,
) -> Result<Option<PacketEvent>, PcapSourceError>
where
    R: PcapReaderIterator,
    F: FnMut(PcapBlockOwned<'_>) -> Option<PacketEvent>,
{
    loop {
        match reader.next() {
            Ok((offset, block)) => {
                let event = on_block(block);
                reader.consume(offset);
                if event.is_some() {
                    return Ok(event);
                }
            }
            Err(PcapError::Eof) => return Ok(None),
            Err(PcapError::Incomplete(_)) => {
                reader
                    .refill()
                    .map_err(|e| PcapSourceError::pcap("reader refill", e))?;
            }
            Err(e) => {
                debug!(format, error = %e, "capture read failed");
                return Err(PcapSourceError::pcap("reader next", e));
            }
        }
    }
}

fn ng_block(interfaces: &mut Vec<InterfaceInfo>, block: PcapBlockOwned<'_>) -> Option<PacketEvent> {
    let PcapBlockOwned::NG(block) = block else {
        return None;
    };
    match block {
        // Interface ids are scoped to their section.
        Block::SectionHeader(_) => {
            interfaces.clear();
            None
        }
        Block::InterfaceDescription(idb) => {
            let ts_units_per_second = ts_units_per_second(idb.if_tsresol).unwrap_or_else(|| {
                debug!(
                    if_tsresol = idb.if_tsresol,
                    "unsupported timestamp resolution, assuming microseconds"
                );
                layout::DEFAULT_TS_UNITS_PER_SECOND
            });
            interfaces.push(InterfaceInfo {
                linktype: idb.linktype,
                ts_units_per_second,
                snaplen: idb.snaplen,
            });
            None
        }
        Block::EnhancedPacket(epb) => {
            let interface = interface_for(interfaces, epb.if_id);
            Some(PacketEvent {
                ts: Some(pcapng_ts_to_seconds(
                    epb.ts_high,
                    epb.ts_low,
                    interface.ts_units_per_second,
                )),
                linktype: interface.linktype,
                data: captured_data(epb.data, epb.caplen).to_vec(),
            })
        }
        Block::SimplePacket(spb) => {
            let interface = interface_for(interfaces, 0);
            let captured_len = simple_packet_len(spb.origlen, interface.snaplen);
            Some(PacketEvent {
                ts: None,
                linktype: interface.linktype,
                data: captured_data(spb.data, captured_len).to_vec(),
            })
        }
        _ => None,
    }
}
