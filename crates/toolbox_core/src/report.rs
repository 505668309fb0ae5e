//! Assembly of scan results into one human-readable report.

const DIVIDER_WIDTH: usize = 60;

/// One titled block of the diagnostic report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Renders the full report: preamble, every section in the given order
/// (including "not found" ones), dividers, closing tip.
pub fn render_report(sections: &[Section]) -> String {
    let divider = "=".repeat(DIVIDER_WIDTH);
    let mut out = String::from(PREAMBLE);
    for section in sections {
        out.push_str(&format!("[{}]\n", section.title));
        for line in &section.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&divider);
        out.push_str("\n\n");
    }
    out.push_str(CLOSING_TIP);
    out
}

const PREAMBLE: &str = "\
=== HID / USB driver and system event report ===

[Important]
This report can be very long. That is normal: Windows driver-install
logs, event logs and service records produce a large amount of text,
and length alone does not indicate a serious problem.

If anything in the report is unclear, you can:
  1. share it with a technician who knows Windows internals;
  2. paste it into an AI assistant for a detailed explanation;
  3. if no HID/USB device errors appear, there was no recent driver fault.

";

const CLOSING_TIP: &str = "(Tip: for deeper analysis, inspect the raw log files.)\n";
