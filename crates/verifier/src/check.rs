use crate::catalog::expected_catalog;
use crate::compare::{compare_records, CheckOutcome};
use crate::extract::extract_attachments;
use crate::version::parse_kernel_version;
use crate::Result;

/// Run the full acceptance check on captured inputs.
///
/// A kernel release that does not parse aborts the check with an error; a
/// log with missing or surplus records is a failing [`CheckOutcome`]
/// instead. Pure and stateless, safe to call repeatedly.
pub fn run_check(arch: &str, kernel_info: &str, log_text: &str) -> Result<CheckOutcome> {
    let version = parse_kernel_version(kernel_info)?;
    let expected = expected_catalog(&version, arch);
    let actual = extract_attachments(log_text);
    Ok(compare_records(actual, expected))
}
