//! Kernel dump listing (LiveKernelReports).

use std::path::Path;

use toolbox_core::Section;
use walkdir::WalkDir;

/// Lists kernel dump files without reading their contents.
pub fn scan_kernel_reports(dir: &Path) -> Section {
    let mut section = Section::new("LiveKernelReports");

    if !dir.exists() {
        section.push("LiveKernelReports directory not found.");
        return section;
    }

    for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
        let is_dump = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("dmp"));
        if is_dump {
            section.push(format!("Kernel dump found: {}", entry.path().display()));
        }
    }

    if section.is_empty() {
        section.push("No kernel dump files found.");
    }
    section
}
