//! Full HID/USB diagnostics: four independent best-effort passes merged
//! into one report.

use std::path::PathBuf;

use toolbox_core::{render_report, Section};
use toolbox_logging::toolbox_info;

use crate::eventlog::scan_event_log;
use crate::exec::CommandRunner;
use crate::kernel::scan_kernel_reports;
use crate::setupapi::scan_setupapi;
use crate::wer::scan_wer_reports;

/// Locations of the log sources. Defaults are the stock Windows paths;
/// tests point them at fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsPaths {
    pub setupapi_log: PathBuf,
    pub wer_archive: PathBuf,
    pub kernel_reports: PathBuf,
}

impl Default for DiagnosticsPaths {
    fn default() -> Self {
        Self {
            setupapi_log: PathBuf::from(r"C:\Windows\INF\setupapi.dev.log"),
            wer_archive: PathBuf::from(r"C:\ProgramData\Microsoft\Windows\WER\ReportArchive"),
            kernel_reports: PathBuf::from(r"C:\Windows\LiveKernelReports"),
        }
    }
}

/// Runs all four scan passes unconditionally and renders the report.
///
/// Each pass is independently best-effort; a failing or missing source
/// never aborts the others. Blocks until the slowest pass (the event
/// log queries) returns.
pub fn run_full_diagnostics(paths: &DiagnosticsPaths, runner: &dyn CommandRunner) -> String {
    toolbox_info!("running HID/USB diagnostics, this can take a moment...");
    let sections: Vec<Section> = vec![
        scan_setupapi(&paths.setupapi_log),
        scan_event_log(runner),
        scan_wer_reports(&paths.wer_archive),
        scan_kernel_reports(&paths.kernel_reports),
    ];
    toolbox_info!("diagnostics finished.");
    render_report(&sections)
}
