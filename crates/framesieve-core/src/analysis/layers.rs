use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::{EthertypeSummary, LayerSummary};

const LAYER_COUNT: usize = 6;

/// Protocol layers counted by the dissector, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Ethernet,
    Arp,
    Ipv4,
    Ipv6,
    Icmp,
    Udp,
}

impl Layer {
    pub const ALL: [Layer; LAYER_COUNT] = [
        Layer::Ethernet,
        Layer::Arp,
        Layer::Ipv4,
        Layer::Ipv6,
        Layer::Icmp,
        Layer::Udp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Ethernet => "ethernet",
            Layer::Arp => "arp",
            Layer::Ipv4 => "ipv4",
            Layer::Ipv6 => "ipv6",
            Layer::Icmp => "icmp",
            Layer::Udp => "udp",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Frame counters shared by every subscriber of one decode tree.
#[derive(Debug, Default)]
pub struct LayerCounters {
    frames: [AtomicU64; LAYER_COUNT],
    ethertypes: Mutex<BTreeMap<u16, u64>>,
}

impl LayerCounters {
    pub fn record(&self, layer: Layer) {
        self.frames[layer.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ethertype(&self, ethertype: u16) {
        let mut ethertypes = self
            .ethertypes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *ethertypes.entry(ethertype).or_insert(0) += 1;
    }

    pub fn frames(&self, layer: Layer) -> u64 {
        self.frames[layer.index()].load(Ordering::Relaxed)
    }

    pub fn layer_summaries(&self) -> Vec<LayerSummary> {
        Layer::ALL
            .iter()
            .map(|&layer| LayerSummary {
                layer: layer.name().to_string(),
                frames: self.frames(layer),
            })
            .collect()
    }

    /// Ethertype counts in ascending ethertype order.
    pub fn ethertype_summaries(&self) -> Vec<EthertypeSummary> {
        let ethertypes = self
            .ethertypes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        ethertypes
            .iter()
            .map(|(&ethertype, &frames)| EthertypeSummary { ethertype, frames })
            .collect()
    }
}
