//! Startup-log acceptance oracle for the ingraind eBPF agent.
//!
//! The harness captures two blobs of text from a freshly provisioned host:
//! the kernel release string and the agent's startup log. This crate holds
//! the decision logic only: derive a version code from the release string,
//! build the catalog of instrumentation points the agent must attach on
//! that kernel, extract what the log says was attached, and diff the two.

use std::fmt;

mod catalog;
mod check;
mod compare;
mod extract;
mod version;

pub use catalog::{clone_probe_name, expected_catalog, AttachmentRecord, SYSCALL_WRAPPER_SINCE};
pub use check::run_check;
pub use compare::{compare_records, CheckOutcome};
pub use extract::{extract_attachments, LOADED_MARKER};
pub use version::{parse_kernel_version, KernelVersion};

#[derive(Debug)]
pub enum VerifierError {
    /// The kernel release string held no `major.minor.patch` triple.
    VersionParse(String),
}

impl fmt::Display for VerifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionParse(raw) => {
                write!(f, "no kernel version triple in {:?}", raw)
            }
        }
    }
}

impl std::error::Error for VerifierError {}

pub type Result<T> = std::result::Result<T, VerifierError>;

#[cfg(test)]
mod tests_compare;
