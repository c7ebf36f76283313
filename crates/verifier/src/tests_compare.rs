use super::*;

fn records(descriptors: &[&str]) -> Vec<AttachmentRecord> {
    descriptors
        .iter()
        .map(|d| AttachmentRecord::from_descriptor(d).expect("descriptor"))
        .collect()
}

#[test]
fn equal_sets_pass_in_any_order() {
    let actual = records(&["vfs_read, Kprobe", "dns_queries, XDP"]);
    let expected = records(&["dns_queries, XDP", "vfs_read, Kprobe"]);
    let outcome = compare_records(actual, expected);
    assert!(outcome.pass);
    assert!(outcome.missing.is_empty());
    assert!(outcome.unexpected.is_empty());
}

#[test]
fn compare_with_self_always_passes() {
    let set = records(&[
        "tcp_sendmsg, Kprobe",
        "tcp_sendmsg, Kprobe",
        "udp_rcv, Kprobe",
    ]);
    let outcome = compare_records(set.clone(), set);
    assert!(outcome.pass);
}

#[test]
fn reports_missing_entries() {
    let actual = records(&["vfs_read, Kprobe"]);
    let expected = records(&["dns_queries, XDP", "vfs_read, Kprobe"]);
    let outcome = compare_records(actual, expected);
    assert!(!outcome.pass);
    assert_eq!(outcome.missing, records(&["dns_queries, XDP"]));
    assert!(outcome.unexpected.is_empty());
}

#[test]
fn reports_unexpected_entries() {
    let actual = records(&["vfs_read, Kprobe", "vfs_statx, Kprobe"]);
    let expected = records(&["vfs_read, Kprobe"]);
    let outcome = compare_records(actual, expected);
    assert!(!outcome.pass);
    assert!(outcome.missing.is_empty());
    assert_eq!(outcome.unexpected, records(&["vfs_statx, Kprobe"]));
}

#[test]
fn duplicates_match_count_for_count() {
    let actual = records(&["tcp_sendmsg, Kprobe"]);
    let expected = records(&["tcp_sendmsg, Kprobe", "tcp_sendmsg, Kprobe"]);
    let outcome = compare_records(actual, expected);
    assert!(!outcome.pass);
    assert_eq!(outcome.missing, records(&["tcp_sendmsg, Kprobe"]));

    let surplus = compare_records(
        records(&["tcp_sendmsg, Kprobe", "tcp_sendmsg, Kprobe"]),
        records(&["tcp_sendmsg, Kprobe"]),
    );
    assert_eq!(surplus.unexpected, records(&["tcp_sendmsg, Kprobe"]));
}

#[test]
fn comparison_is_exact_about_text() {
    // Same probe, differently cased mechanism: not a match.
    let outcome = compare_records(
        records(&["vfs_read, kprobe"]),
        records(&["vfs_read, Kprobe"]),
    );
    assert!(!outcome.pass);
    assert_eq!(outcome.missing.len(), 1);
    assert_eq!(outcome.unexpected.len(), 1);
}

#[test]
fn outcome_lists_are_sorted() {
    let outcome = compare_records(
        records(&["vfs_write, Kprobe", "dns_queries, XDP"]),
        records(&["udp_rcv, Kprobe", "tcp_sendmsg, Kprobe"]),
    );
    for list in [
        &outcome.actual,
        &outcome.expected,
        &outcome.missing,
        &outcome.unexpected,
    ] {
        assert!(list.windows(2).all(|w| w[0] <= w[1]));
    }
}
