use crate::catalog::AttachmentRecord;

/// Marker the agent emits for every instrumentation point it attached.
pub const LOADED_MARKER: &str = "ingraind::grains::ebpf] Loaded";

/// Collect the attachment records reported in a startup log.
///
/// A line counts when it contains the marker and the field after its last
/// `": "` parses as a `probe, mechanism` descriptor; everything else in the
/// log is ignored. The result is sorted with duplicates kept, so it does
/// not depend on the order probes happened to attach in.
pub fn extract_attachments(log_text: &str) -> Vec<AttachmentRecord> {
    let mut records: Vec<AttachmentRecord> = log_text
        .lines()
        .filter(|line| line.contains(LOADED_MARKER))
        .filter_map(|line| line.rsplit_once(": ").map(|(_, descriptor)| descriptor))
        .filter_map(AttachmentRecord::from_descriptor)
        .collect();
    records.sort();
    records
}
