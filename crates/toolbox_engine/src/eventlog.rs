//! System event log scan through wevtutil.

use toolbox_core::Section;

use crate::exec::{CommandRunner, ExecError};

/// Event ids tied to USB/HID devices, driver loads and service failures.
const EVENT_IDS: &[u32] = &[22, 51, 2100, 2101, 7000, 7001, 7005, 7034, 10110, 10111];

/// How many entries to fetch per event id.
const ENTRIES_PER_ID: &str = "10";

/// Queries the most recent matching entries for each event id.
///
/// Best-effort: a query that cannot run is noted inline and the
/// remaining ids are still tried. A non-zero exit usually just means
/// the channel has no such events and is skipped quietly.
pub fn scan_event_log(runner: &dyn CommandRunner) -> Section {
    let mut section = Section::new("System event log");

    for id in EVENT_IDS {
        let query = format!("/q:*[System[(EventID={id})]]");
        let count = format!("/c:{ENTRIES_PER_ID}");
        match runner.run("wevtutil", &["qe", "System", &query, &count, "/f:text"]) {
            Ok(output) => {
                let trimmed = output.stdout.trim();
                if !trimmed.is_empty() {
                    section.push(format!("[EventID {id}]"));
                    section.push(trimmed.to_string());
                }
            }
            Err(ExecError::NonZero { .. }) => {}
            Err(err) => section.push(format!("error while reading event {id}: {err}")),
        }
    }

    if section.is_empty() {
        section.push("No matching events found in the System event log.");
    }
    section
}
