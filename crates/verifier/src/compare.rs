use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::AttachmentRecord;

/// Verdict of one acceptance check, with both full record lists and the
/// differences between them. All lists are sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub pass: bool,
    pub actual: Vec<AttachmentRecord>,
    pub expected: Vec<AttachmentRecord>,
    pub missing: Vec<AttachmentRecord>,
    pub unexpected: Vec<AttachmentRecord>,
}

/// Diff reported records against the expected catalog.
///
/// Both sides are sorted, then walked in lock-step; duplicates must match
/// count for count. `missing` holds expected entries the log never
/// reported, `unexpected` the reverse. A mismatch is a normal negative
/// outcome, never an error; an empty log just lists the whole catalog as
/// missing.
pub fn compare_records(
    mut actual: Vec<AttachmentRecord>,
    mut expected: Vec<AttachmentRecord>,
) -> CheckOutcome {
    actual.sort();
    expected.sort();

    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < actual.len() && j < expected.len() {
        match actual[i].cmp(&expected[j]) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                unexpected.push(actual[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                missing.push(expected[j].clone());
                j += 1;
            }
        }
    }
    unexpected.extend_from_slice(&actual[i..]);
    missing.extend_from_slice(&expected[j..]);

    CheckOutcome {
        pass: missing.is_empty() && unexpected.is_empty(),
        actual,
        expected,
        missing,
        unexpected,
    }
}
