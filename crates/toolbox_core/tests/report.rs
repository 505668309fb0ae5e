use toolbox_core::{render_report, Section};

fn not_found_sections() -> Vec<Section> {
    let titles = [
        "setupapi.dev.log",
        "System event log",
        "WER reports",
        "LiveKernelReports",
    ];
    titles
        .iter()
        .map(|title| {
            let mut section = Section::new(*title);
            section.push("not found");
            section
        })
        .collect()
}

#[test]
fn all_sections_render_in_fixed_order_even_when_empty_handed() {
    let report = render_report(&not_found_sections());

    let positions: Vec<usize> = [
        "[setupapi.dev.log]",
        "[System event log]",
        "[WER reports]",
        "[LiveKernelReports]",
    ]
    .iter()
    .map(|heading| report.find(heading).unwrap())
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn report_carries_preamble_dividers_and_closing_tip() {
    let report = render_report(&not_found_sections());

    assert!(report.starts_with("=== HID / USB driver and system event report ==="));
    assert!(report.contains("paste it into an AI assistant"));
    assert_eq!(report.matches(&"=".repeat(60)).count(), 4);
    assert!(report.trim_end().ends_with("(Tip: for deeper analysis, inspect the raw log files.)"));
}
