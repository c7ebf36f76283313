use crate::{Result, VerifierError};

/// Kernel release parsed from the trailing token of a `uname` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelVersion {
    pub major: u64,
    pub minor: u32,
    pub patch: u32,
}

impl KernelVersion {
    /// Comparable version code: `major * 10000 + minor * 100 + patch`.
    ///
    /// Minor and patch carry two decimal digits of weight each; a value of
    /// 100 or more spills into the neighbouring field. Mainline releases
    /// stay below that bound.
    pub fn code(&self) -> u64 {
        self.major * 10_000 + u64::from(self.minor) * 100 + u64::from(self.patch)
    }
}

/// Parse a kernel release like `5.4.0-42-generic` into a [`KernelVersion`].
///
/// Accepts a full `uname -sr` report and takes its last whitespace token.
/// Minor and patch keep their leading digits only, so distro qualifiers
/// (`0-42-generic`) are discarded. Fewer than three dot fields is an error.
pub fn parse_kernel_version(raw: &str) -> Result<KernelVersion> {
    let release = raw.split_whitespace().last().unwrap_or("");
    let mut fields = release.split('.');

    let major = fields
        .next()
        .map(|field| field.trim_start_matches(|c: char| !c.is_ascii_digit()))
        .and_then(|field| field.parse::<u64>().ok());
    let minor = fields.next().and_then(leading_number);
    let patch = fields.next().and_then(leading_number);

    match (major, minor, patch) {
        (Some(major), Some(minor), Some(patch)) => Ok(KernelVersion {
            major,
            minor,
            patch,
        }),
        _ => Err(VerifierError::VersionParse(raw.to_string())),
    }
}

/// Digits up to the first non-digit character, parsed as a number.
fn leading_number(field: &str) -> Option<u32> {
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().ok()
}
