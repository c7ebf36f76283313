use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::KernelVersion;

/// Version code of kernel 4.17.0, the release that moved syscall entry
/// points behind arch-prefixed wrappers (`__x64_sys_clone` and friends).
pub const SYSCALL_WRAPPER_SINCE: u64 = 41_700;

/// Probes the agent attaches on every kernel, with their mechanisms.
const STATIC_PROBES: &[(&str, &str)] = &[
    ("dns_queries", "XDP"),
    ("tcp_recvmsg", "Kprobe"),
    ("tcp_recvmsg", "Kretprobe"),
    ("tcp_sendmsg", "Kprobe"),
    ("tcp_sendmsg", "Kretprobe"),
    ("tcp_v4_connect", "Kprobe"),
    ("tcp_v4_connect", "Kretprobe"),
    ("udp_rcv", "Kprobe"),
    ("udp_sendmsg", "Kprobe"),
    ("vfs_read", "Kprobe"),
    ("vfs_read", "Kretprobe"),
    ("vfs_write", "Kprobe"),
    ("vfs_write", "Kretprobe"),
];

/// One attached instrumentation point, as the agent reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub probe: String,
    pub mechanism: String,
}

impl AttachmentRecord {
    pub fn new(probe: impl Into<String>, mechanism: impl Into<String>) -> Self {
        Self {
            probe: probe.into(),
            mechanism: mechanism.into(),
        }
    }

    /// Parse the `probe, mechanism` descriptor the agent logs on attach.
    pub fn from_descriptor(descriptor: &str) -> Option<Self> {
        let (probe, mechanism) = descriptor.split_once(", ")?;
        if probe.is_empty() || mechanism.is_empty() {
            return None;
        }
        Some(Self::new(probe, mechanism))
    }
}

impl fmt::Display for AttachmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.probe, self.mechanism)
    }
}

// Records order by their log form, which is also how reports list them.
impl Ord for AttachmentRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl PartialOrd for AttachmentRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Name the clone probe attaches under on this kernel.
///
/// From 4.17 the agent probes the arch-prefixed wrapper instead of the bare
/// `sys_clone` symbol; `arch` is substituted verbatim.
pub fn clone_probe_name(version: &KernelVersion, arch: &str) -> String {
    if version.code() >= SYSCALL_WRAPPER_SINCE {
        format!("__{}_sys_clone", arch)
    } else {
        "sys_clone".to_string()
    }
}

/// Catalog of records the agent must report for this kernel and
/// architecture, sorted.
pub fn expected_catalog(version: &KernelVersion, arch: &str) -> Vec<AttachmentRecord> {
    let mut records: Vec<AttachmentRecord> = STATIC_PROBES
        .iter()
        .map(|(probe, mechanism)| AttachmentRecord::new(*probe, *mechanism))
        .collect();
    records.push(AttachmentRecord::new(
        clone_probe_name(version, arch),
        "Kprobe",
    ));
    records.sort();
    records
}
