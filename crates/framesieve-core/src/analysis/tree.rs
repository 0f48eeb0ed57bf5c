use std::sync::Arc;

use pcap_parser::Linktype;
use tracing::debug;

use super::layers::{Layer, LayerCounters};
use crate::filter::{DecodeStage, RootFilter};
use crate::frame::{Frame, FrameRef};
use crate::protocols::arp::ArpHeader;
use crate::protocols::ethernet::EthernetHeader;
use crate::protocols::icmp::IcmpHeader;
use crate::protocols::ipv4::Ipv4Header;
use crate::protocols::ipv6::Ipv6Header;
use crate::protocols::udp::UdpHeader;

/// Decode trees for every supported link type, all counting into one set of
/// counters.
///
/// ```text
/// ethernet ─┬─ arp
///           ├─ ipv4 ─┬─ icmp
///           │        └─ udp
///           └─ ipv6 ─── udp
/// raw ip ───┬─ ipv4 ─┬─ icmp
///           │        └─ udp
///           └─ ipv6 ─── udp
/// ```
pub struct Dissector {
    ethernet: RootFilter<EthernetHeader>,
    raw_ipv4: RootFilter<Ipv4Header>,
    raw_ipv6: RootFilter<Ipv6Header>,
    counters: Arc<LayerCounters>,
}

impl Dissector {
    pub fn new() -> Self {
        let counters = Arc::new(LayerCounters::default());

        let mut ethernet = RootFilter::<EthernetHeader>::new();
        ethernet.add_callback(count::<EthernetHeader>(Arc::clone(&counters), Layer::Ethernet));
        let ethertypes = Arc::clone(&counters);
        ethernet.add_callback(move |frame| ethertypes.record_ethertype(frame.ethertype()));
        ethernet.chain::<ArpHeader>(|arp| {
            arp.add_callback(count::<ArpHeader>(Arc::clone(&counters), Layer::Arp));
        });
        ethernet.chain::<Ipv4Header>(|ipv4| ipv4_branch(ipv4, &counters));
        ethernet.chain::<Ipv6Header>(|ipv6| ipv6_branch(ipv6, &counters));

        let mut raw_ipv4 = RootFilter::<Ipv4Header>::new();
        ipv4_branch(&mut raw_ipv4, &counters);
        let mut raw_ipv6 = RootFilter::<Ipv6Header>::new();
        ipv6_branch(&mut raw_ipv6, &counters);

        Self {
            ethernet,
            raw_ipv4,
            raw_ipv6,
            counters,
        }
    }

    pub fn counters(&self) -> &LayerCounters {
        &self.counters
    }

    /// Decode one captured packet. Returns `false` when `linktype` has no
    /// decode tree.
    pub fn dissect(&self, linktype: Linktype, data: &[u8]) -> bool {
        match linktype {
            Linktype::ETHERNET => {
                self.ethernet.parse(data);
                true
            }
            Linktype::RAW | Linktype::IPV4 | Linktype::IPV6 => {
                self.dissect_raw_ip(data);
                true
            }
            other => {
                debug!(linktype = other.0, "no decode tree for link type");
                false
            }
        }
    }

    fn dissect_raw_ip(&self, data: &[u8]) {
        match data.first().map(|byte| byte >> 4) {
            Some(4) => {
                self.raw_ipv4.parse(data);
            }
            Some(6) => {
                self.raw_ipv6.parse(data);
            }
            version => debug!(?version, "raw packet is neither IPv4 nor IPv6"),
        }
    }
}

impl Default for Dissector {
    fn default() -> Self {
        Self::new()
    }
}

fn ipv4_branch<S>(ipv4: &mut S, counters: &Arc<LayerCounters>)
where
    S: DecodeStage<Frame = Ipv4Header>,
{
    ipv4.add_callback(count::<Ipv4Header>(Arc::clone(counters), Layer::Ipv4));
    ipv4.chain::<IcmpHeader>(|icmp| {
        icmp.add_callback(count::<IcmpHeader>(Arc::clone(counters), Layer::Icmp));
    });
    ipv4.chain::<UdpHeader>(|udp| {
        udp.add_callback(count::<UdpHeader>(Arc::clone(counters), Layer::Udp));
    });
}

fn ipv6_branch<S>(ipv6: &mut S, counters: &Arc<LayerCounters>)
where
    S: DecodeStage<Frame = Ipv6Header>,
{
    ipv6.add_callback(count::<Ipv6Header>(Arc::clone(counters), Layer::Ipv6));
    ipv6.chain::<UdpHeader>(|udp| {
        udp.add_callback(count::<UdpHeader>(Arc::clone(counters), Layer::Udp));
    });
}

fn count<T: Frame>(
    counters: Arc<LayerCounters>,
    layer: Layer,
) -> impl Fn(&FrameRef<'_, T>) + Send + Sync + 'static {
    move |_| counters.record(layer)
}
