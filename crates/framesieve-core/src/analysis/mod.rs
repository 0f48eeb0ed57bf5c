use std::path::Path;

use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::debug;

use crate::source::{PacketEvent, PacketSource, PcapFileSource, SourceError};
use crate::{CaptureSummary, DEFAULT_GENERATED_AT, Report, make_stub_report};

mod layers;
mod tree;

use tree::Dissector;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Dissect every packet of a PCAP/PCAPNG file.
///
/// # Errors
/// Returns `AnalysisError` when the file cannot be opened, read or parsed as
/// a capture. Packets that fail to decode are counted, not reported as
/// errors.
pub fn dissect_pcap_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = PcapFileSource::open(path)?;
    dissect_source(path, source)
}

/// Dissect every packet yielded by `source`; `path` is only used for the
/// report's input metadata.
pub fn dissect_source<S: PacketSource>(
    path: &Path,
    mut source: S,
) -> Result<Report, AnalysisError> {
    let dissector = Dissector::new();
    let mut packets_total = 0u64;
    let mut unsupported_linktypes = 0u64;
    let mut first_ts = None;
    let mut last_ts = None;

    while let Some(PacketEvent { ts, linktype, data }) = source.next_packet()? {
        packets_total += 1;
        update_ts_bounds(&mut first_ts, &mut last_ts, ts);
        if !dissector.dissect(linktype, &data) {
            unsupported_linktypes += 1;
        }
    }
    debug!(packets_total, unsupported_linktypes, "capture dissected");

    let mut report = make_stub_report(&path.display().to_string(), path.metadata()?.len());
    report.capture_summary = Some(CaptureSummary {
        packets_total,
        time_start: ts_to_rfc3339(first_ts),
        time_end: ts_to_rfc3339(last_ts),
    });
    report.generated_at = report
        .capture_summary
        .as_ref()
        .and_then(|summary| summary.time_end.clone().or(summary.time_start.clone()))
        .unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());
    report.layers = dissector.counters().layer_summaries();
    report.ethertypes = dissector.counters().ethertype_summaries();
    report.unsupported_linktypes = unsupported_linktypes;
    Ok(report)
}

fn update_ts_bounds(first: &mut Option<f64>, last: &mut Option<f64>, ts: Option<f64>) {
    let Some(ts) = ts else {
        return;
    };
    if first.is_none_or(|existing| ts < existing) {
        *first = Some(ts);
    }
    if last.is_none_or(|existing| ts > existing) {
        *last = Some(ts);
    }
}

fn ts_to_rfc3339(ts: Option<f64>) -> Option<String> {
    let nanos = (ts? * 1_000_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
}
