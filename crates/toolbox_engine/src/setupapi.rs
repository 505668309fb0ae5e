//! Scan of the driver install log (setupapi.dev.log).

use std::fs;
use std::path::Path;

use toolbox_core::{resolve_vid_pid, Section};
use toolbox_logging::toolbox_debug;

use crate::readlog::{decode_log, tail_lines};

/// Only the most recent lines matter; older entries drown the report.
const TAIL_LINES: usize = 500;

/// Substrings that mark a line as interesting, matched case-insensitively.
const KEYWORDS: &[&str] = &[
    "failed",
    "error",
    "not migrated",
    "device removed",
    "install failed",
    "driver",
    "hid",
    "usb",
    "keyboard",
    "mouse",
];

/// Scans the driver install log for HID/USB-related anomalies,
/// annotating lines that carry a VID/PID pair.
pub fn scan_setupapi(log_path: &Path) -> Section {
    let mut section = Section::new("setupapi.dev.log");

    let bytes = match fs::read(log_path) {
        Ok(bytes) => bytes,
        Err(_) => {
            section.push("setupapi.dev.log not found.");
            return section;
        }
    };

    let decoded = decode_log(&bytes);
    toolbox_debug!("decoded {:?} as {}", log_path, decoded.encoding_label);

    let mut matches = Vec::new();
    for line in tail_lines(&decoded.text, TAIL_LINES) {
        let lower = line.to_lowercase();
        if !KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            continue;
        }
        let line = line.trim();
        match resolve_vid_pid(line) {
            Some(id) => {
                let hint = id
                    .hint
                    .as_deref()
                    .map(|h| format!(" ({h})"))
                    .unwrap_or_default();
                matches.push(format!("{line}\n    -> device: {}{hint}", id.vendor));
            }
            None => matches.push(line.to_string()),
        }
    }

    if matches.is_empty() {
        section.push("No HID/USB-related anomalies found in setupapi.dev.log.");
    } else {
        section.push("Anomalies detected:");
        for entry in matches {
            section.push(entry);
        }
    }
    section
}
