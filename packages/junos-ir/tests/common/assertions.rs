//! Custom assertions for lowered output

use junos_ir::shared::models::{IpProtocol, SubRange};
use junos_ir::target::{AclLine, IpAccessList, LineAction};
use junos_ir::{Severity, Warnings};

/// Assert that no red flag was recorded
pub fn assert_no_red_flags(warnings: &Warnings) {
    assert_eq!(
        warnings.count(Severity::RedFlag),
        0,
        "Expected no red flags, got: {:?}",
        warnings.messages()
    );
}

/// Assert the number of diagnostics of one severity
pub fn assert_warning_count(warnings: &Warnings, severity: Severity, expected: usize) {
    assert_eq!(
        warnings.count(severity),
        expected,
        "Expected {expected} {severity} diagnostics, got: {:?}",
        warnings.messages()
    );
}

/// Assert that some diagnostic mentions every needle
pub fn assert_warning_mentions(warnings: &Warnings, needles: &[&str]) {
    assert!(
        warnings
            .messages()
            .iter()
            .any(|message| needles.iter().all(|needle| message.contains(needle))),
        "Expected a diagnostic mentioning {needles:?}, got: {:?}",
        warnings.messages()
    );
}

pub fn assert_line_count(acl: &IpAccessList, expected: usize) {
    assert_eq!(
        acl.lines.len(),
        expected,
        "Expected {expected} lines in '{}', got: {:#?}",
        acl.name,
        acl.lines
    );
}

/// Assert a line matches exactly one protocol and destination port
pub fn assert_port_line(line: &AclLine, protocol: IpProtocol, port: u32, action: LineAction) {
    let hs = &line.header_space;
    assert_eq!(
        hs.ip_protocols.iter().copied().collect::<Vec<_>>(),
        vec![protocol],
        "Unexpected protocols on line '{}'",
        line.name
    );
    assert_eq!(
        hs.dst_ports.iter().copied().collect::<Vec<_>>(),
        vec![SubRange::single(port)],
        "Unexpected destination ports on line '{}'",
        line.name
    );
    assert_eq!(line.action, action, "Unexpected action on line '{}'", line.name);
}
