//! Crash-report archive scan (Windows Error Reporting).

use std::fs;
use std::path::Path;

use toolbox_core::Section;
use walkdir::WalkDir;

/// A report is included when its text mentions one of these (plus
/// "driver", matched case-insensitively).
const CONTENT_MARKERS: &[&str] = &["HID", "USB", "nvlddmkm", "Kernel"];

/// Walks the report archive and includes every `Report.wer` whose text
/// looks HID/USB/driver related. Unreadable files are skipped silently.
pub fn scan_wer_reports(archive: &Path) -> Section {
    let mut section = Section::new("WER reports");

    if !archive.exists() {
        section.push("WER report directory not found.");
        return section;
    }

    let mut found = false;
    for entry in WalkDir::new(archive).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().contains("Report.wer") {
            continue;
        }
        found = true;
        let Ok(bytes) = fs::read(entry.path()) else {
            continue;
        };
        let text = String::from_utf8_lossy(&bytes);
        if is_relevant(&text) {
            section.push(format!("Report: {}\n{text}", entry.path().display()));
        }
    }

    if !found {
        section.push("No WER reports found.");
    }
    section
}

fn is_relevant(text: &str) -> bool {
    CONTENT_MARKERS.iter().any(|marker| text.contains(marker))
        || text.to_lowercase().contains("driver")
}
