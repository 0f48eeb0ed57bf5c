use std::ops::Range;

use zerocopy::IntoBytes;

use super::layout::{IPV4_MIN_HEADER_LEN, IPV4_MIN_IHL, IPV4_VERSION, Ipv4Header};
use crate::frame::{CheckFrame, Frame, FrameMut, FrameRef, ParentMatch};
use crate::protocols::common::checksum::InternetChecksum;
use crate::protocols::ethernet::EthernetHeader;
use crate::protocols::ethernet::layout::ETHERTYPE_IPV4;

impl Frame for Ipv4Header {
    const NAME: &'static str = "ipv4";

    fn payload_bounds(&self, _frame_len: usize) -> Range<usize> {
        self.header_length()..usize::from(self.total_length())
    }
}

impl CheckFrame for Ipv4Header {
    fn check_frame(frame: &FrameRef<'_, Self>) -> bool {
        let header_length = frame.header_length();
        let total_length = usize::from(frame.total_length());
        frame.version() == IPV4_VERSION
            && frame.ihl() >= IPV4_MIN_IHL
            && header_length <= frame.frame_len()
            && header_length <= total_length
            && total_length <= frame.frame_len()
            && header_checksum(frame) == 0
    }
}

impl ParentMatch<EthernetHeader> for Ipv4Header {
    fn parent_match(parent: &FrameRef<'_, EthernetHeader>) -> bool {
        parent.ethertype() == ETHERTYPE_IPV4
    }
}

/// Checksum over the header and its options; 0 when the stored checksum is
/// correct.
pub fn header_checksum(frame: &FrameRef<'_, Ipv4Header>) -> u16 {
    let mut sum = InternetChecksum::new();
    sum.add(frame.header_bytes())
        .add(options(frame.header(), frame.body()));
    sum.finish()
}

/// Recompute the header checksum after the header was edited in place.
pub fn update_checksum(frame: &mut FrameMut<'_, Ipv4Header>) {
    frame.set_checksum(0);
    let mut sum = InternetChecksum::new();
    sum.add(frame.header().as_bytes())
        .add(options(frame.header(), frame.body()));
    let checksum = sum.finish();
    frame.set_checksum(checksum);
}

fn options<'a>(header: &Ipv4Header, body: &'a [u8]) -> &'a [u8] {
    let len = header.header_length().saturating_sub(IPV4_MIN_HEADER_LEN);
    body.get(..len).unwrap_or(&[])
}
