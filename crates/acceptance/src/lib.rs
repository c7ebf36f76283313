//! Harness around the verifier oracle: loads the captured inputs and
//! renders the check result for humans and for telemetry.
//!
//! Provisioning the remote host, credential plumbing and teardown live in
//! the surrounding CI tooling; this crate only consumes the two text blobs
//! that tooling captures (kernel release string, agent startup log).

use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::Read;

use verifier::{clone_probe_name, AttachmentRecord, CheckOutcome, KernelVersion};

/// Read a captured text blob from a file, or from stdin when `path` is `-`.
pub fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Render the human-readable report: both full sorted lists, plus the
/// differences when the check failed, so a mismatch can be eyeballed.
pub fn render_report(outcome: &CheckOutcome) -> String {
    let mut out = String::new();
    let verdict = if outcome.pass { "pass" } else { "fail" };
    let _ = writeln!(out, "verdict: {verdict}");
    write_list(&mut out, "attached", &outcome.actual);
    write_list(&mut out, "expected", &outcome.expected);
    if !outcome.pass {
        write_list(&mut out, "missing", &outcome.missing);
        write_list(&mut out, "unexpected", &outcome.unexpected);
    }
    out
}

fn write_list(out: &mut String, label: &str, records: &[AttachmentRecord]) {
    let _ = writeln!(out, "{} ({}):", label, records.len());
    if records.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for record in records {
        let _ = writeln!(out, "  {record}");
    }
}

/// Capability-style summary of one check, suitable for telemetry.
pub fn capability_report(
    version: &KernelVersion,
    arch: &str,
    outcome: &CheckOutcome,
) -> HashMap<String, String> {
    let mut report = HashMap::new();
    report.insert(
        "kernel_version".to_string(),
        format!("{}.{}.{}", version.major, version.minor, version.patch),
    );
    report.insert("version_code".to_string(), version.code().to_string());
    report.insert("arch".to_string(), arch.to_string());
    report.insert("clone_probe".to_string(), clone_probe_name(version, arch));
    report.insert("attached".to_string(), outcome.actual.len().to_string());
    report.insert("missing".to_string(), outcome.missing.len().to_string());
    report.insert(
        "unexpected".to_string(),
        outcome.unexpected.len().to_string(),
    );
    report.insert("pass".to_string(), outcome.pass.to_string());
    report
}
