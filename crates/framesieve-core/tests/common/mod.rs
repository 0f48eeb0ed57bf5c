//! Capture fixtures written on the fly into temporary directories.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use etherparse::PacketBuilder;
use tempfile::TempDir;

pub const LINKTYPE_NULL: u16 = 0;
pub const LINKTYPE_ETHERNET: u16 = 1;
pub const LINKTYPE_RAW: u16 = 101;

const MAC_A: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];
const MAC_B: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x02];

const BLOCK_SECTION_HEADER: u32 = 0x0A0D_0D0A;
const BLOCK_INTERFACE: u32 = 1;
const BLOCK_SIMPLE_PACKET: u32 = 3;
const BLOCK_ENHANCED_PACKET: u32 = 6;
const OPTION_IF_TSRESOL: u16 = 9;

/// Big-endian PCAPNG file assembled block by block.
pub struct PcapngWriter {
    bytes: Vec<u8>,
}

impl PcapngWriter {
    pub fn new() -> Self {
        let mut writer = Self { bytes: Vec::new() };
        writer.section();
        writer
    }

    /// Start a new section; interface ids restart at 0.
    pub fn section(&mut self) -> &mut Self {
        let mut body = Vec::new();
        body.extend_from_slice(&0x1A2B_3C4Du32.to_be_bytes());
        body.extend_from_slice(&1u16.to_be_bytes());
        body.extend_from_slice(&0u16.to_be_bytes());
        body.extend_from_slice(&(-1i64).to_be_bytes());
        self.block(BLOCK_SECTION_HEADER, &body)
    }

    pub fn interface(&mut self, linktype: u16, tsresol: Option<u8>) -> &mut Self {
        self.interface_with_snaplen(linktype, 65535, tsresol)
    }

    pub fn interface_with_snaplen(
        &mut self,
        linktype: u16,
        snaplen: u32,
        tsresol: Option<u8>,
    ) -> &mut Self {
        let mut body = Vec::new();
        body.extend_from_slice(&linktype.to_be_bytes());
        body.extend_from_slice(&0u16.to_be_bytes());
        body.extend_from_slice(&snaplen.to_be_bytes());
        if let Some(tsresol) = tsresol {
            body.extend_from_slice(&OPTION_IF_TSRESOL.to_be_bytes());
            body.extend_from_slice(&1u16.to_be_bytes());
            body.extend_from_slice(&[tsresol, 0, 0, 0]);
            body.extend_from_slice(&[0, 0, 0, 0]);
        }
        self.block(BLOCK_INTERFACE, &body)
    }

    pub fn packet(&mut self, if_id: u32, ts: u64, data: &[u8]) -> &mut Self {
        let captured = data.len() as u32;
        let mut body = Vec::new();
        body.extend_from_slice(&if_id.to_be_bytes());
        body.extend_from_slice(&((ts >> 32) as u32).to_be_bytes());
        body.extend_from_slice(&(ts as u32).to_be_bytes());
        body.extend_from_slice(&captured.to_be_bytes());
        body.extend_from_slice(&captured.to_be_bytes());
        body.extend_from_slice(data);
        pad(&mut body);
        self.block(BLOCK_ENHANCED_PACKET, &body)
    }

    pub fn simple_packet(&mut self, data: &[u8]) -> &mut Self {
        self.truncated_simple_packet(data.len() as u32, data)
    }

    /// Simple packet whose original length exceeds the stored bytes.
    pub fn truncated_simple_packet(&mut self, origlen: u32, data: &[u8]) -> &mut Self {
        let mut body = Vec::new();
        body.extend_from_slice(&origlen.to_be_bytes());
        body.extend_from_slice(data);
        pad(&mut body);
        self.block(BLOCK_SIMPLE_PACKET, &body)
    }

    pub fn finish(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    fn block(&mut self, block_type: u32, body: &[u8]) -> &mut Self {
        let total_len = (8 + body.len() + 4) as u32;
        self.bytes.extend_from_slice(&block_type.to_be_bytes());
        self.bytes.extend_from_slice(&total_len.to_be_bytes());
        self.bytes.extend_from_slice(body);
        self.bytes.extend_from_slice(&total_len.to_be_bytes());
        self
    }
}

fn pad(body: &mut Vec<u8>) {
    let pad_len = (4 - body.len() % 4) % 4;
    body.resize(body.len() + pad_len, 0);
}

/// Little-endian legacy PCAP file; `packets` are `(ts_sec, ts_fraction, data)`.
pub fn legacy_pcap(linktype: u32, nanosecond: bool, packets: &[(u32, u32, Vec<u8>)]) -> Vec<u8> {
    let magic: u32 = if nanosecond { 0xA1B2_3C4D } else { 0xA1B2_C3D4 };
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&magic.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&4u16.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&65535u32.to_le_bytes());
    bytes.extend_from_slice(&linktype.to_le_bytes());
    for (ts_sec, ts_fraction, data) in packets {
        bytes.extend_from_slice(&ts_sec.to_le_bytes());
        bytes.extend_from_slice(&ts_fraction.to_le_bytes());
        bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(data);
    }
    bytes
}

pub fn write_capture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).expect("write capture");
    path
}

pub fn ethernet_udp_v4(payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2(MAC_A, MAC_B)
        .ipv4([10, 0, 0, 1], [10, 0, 0, 2], 64)
        .udp(40000, 53);
    let mut packet = Vec::<u8>::with_capacity(builder.size(payload.len()));
    builder.write(&mut packet, payload).expect("build packet");
    packet
}

pub fn ethernet_udp_v6(payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2(MAC_A, MAC_B)
        .ipv6([0xfe; 16], [0xff; 16], 64)
        .udp(5353, 5353);
    let mut packet = Vec::<u8>::with_capacity(builder.size(payload.len()));
    builder.write(&mut packet, payload).expect("build packet");
    packet
}

pub fn ethernet_ping() -> Vec<u8> {
    let builder = PacketBuilder::ethernet2(MAC_A, MAC_B)
        .ipv4([10, 0, 0, 1], [10, 0, 0, 2], 64)
        .icmpv4_echo_request(7, 1);
    let payload = b"abcdefgh";
    let mut packet = Vec::<u8>::with_capacity(builder.size(payload.len()));
    builder.write(&mut packet, payload).expect("build packet");
    packet
}

pub fn ethernet_arp_request() -> Vec<u8> {
    let mut frame = Vec::new();
    frame.extend_from_slice(&[0xff; 6]);
    frame.extend_from_slice(&MAC_A);
    frame.extend_from_slice(&0x0806u16.to_be_bytes());
    frame.extend_from_slice(&1u16.to_be_bytes());
    frame.extend_from_slice(&0x0800u16.to_be_bytes());
    frame.extend_from_slice(&[6, 4]);
    frame.extend_from_slice(&1u16.to_be_bytes());
    frame.extend_from_slice(&MAC_A);
    frame.extend_from_slice(&[10, 0, 0, 1]);
    frame.extend_from_slice(&[0; 6]);
    frame.extend_from_slice(&[10, 0, 0, 2]);
    frame
}

/// IPv4/UDP without a link-layer header, for `LINKTYPE_RAW`.
pub fn raw_udp_v4(payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ipv4([10, 0, 0, 1], [10, 0, 0, 2], 64).udp(1000, 2000);
    let mut packet = Vec::<u8>::with_capacity(builder.size(payload.len()));
    builder.write(&mut packet, payload).expect("build packet");
    packet
}
