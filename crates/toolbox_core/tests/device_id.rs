use toolbox_core::resolve_vid_pid;

#[test]
fn logitech_receiver_resolves_vendor_and_hint() {
    let line = r"Device USB\VID_046D&PID_C33F was removed unexpectedly";
    let id = resolve_vid_pid(line).unwrap();

    assert_eq!(id.vendor, "Logitech");
    assert_eq!(id.vendor_id, "046D");
    assert_eq!(id.product_id, "C33F");
    assert!(id.hint.is_some());
}

#[test]
fn unknown_vendor_falls_back_to_id_in_parentheses() {
    let id = resolve_vid_pid(r"USB\VID_FFFF&PID_0000 failed to start").unwrap();

    assert_eq!(id.vendor, "Unknown Vendor (FFFF)");
    assert_eq!(id.hint, None);
}

#[test]
fn hex_digits_match_case_insensitively() {
    let id = resolve_vid_pid(r"USB\VID_046d&PID_c33f").unwrap();

    assert_eq!(id.vendor_id, "046D");
    assert_eq!(id.product_id, "C33F");
    assert_eq!(id.vendor, "Logitech");
}

#[test]
fn line_without_ids_resolves_to_none() {
    assert_eq!(resolve_vid_pid("driver install failed for unknown device"), None);
}
