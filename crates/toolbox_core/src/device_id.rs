//! VID/PID identification for USB device references in log text.
//!
//! Windows driver logs mention devices as `USB\VID_xxxx&PID_xxxx`; the
//! tables below map the common vendor and product ids to readable names.

use std::sync::LazyLock;

use regex::Regex;

/// Common USB vendor ids (partial, read-only data asset).
const VENDORS: &[(&str, &str)] = &[
    ("046D", "Logitech"),
    ("1B1C", "Corsair"),
    ("1532", "Razer"),
    ("0930", "Toshiba"),
    ("0955", "NVIDIA"),
    ("8086", "Intel"),
    ("045E", "Microsoft"),
    ("054C", "Sony"),
    ("04E8", "Samsung"),
    ("1987", "Eluktronics (factory USB controller)"),
    ("174C", "ASMedia USB controller"),
    ("0B05", "ASUS"),
    ("04F2", "Chicony"),
    ("0A5C", "Broadcom"),
    ("13D3", "AzureWave"),
    ("0C45", "Microdia"),
    ("0BB4", "HTC"),
    ("05AC", "Apple"),
    ("12D1", "Huawei"),
    ("0FCE", "Sony Mobile"),
    ("0489", "Foxconn"),
    ("05E3", "Genesys Logic (USB hub)"),
    ("1A86", "QinHeng (common USB serial)"),
];

/// Rough device-type hints keyed by common product ids.
const PRODUCT_HINTS: &[(&str, &str)] = &[
    ("C33F", "Logitech receiver / wireless keyboard-mouse dongle"),
    ("C077", "Logitech mouse"),
    ("00B4", "Logitech keyboard"),
    ("9000", "NVIDIA virtual audio or USB interface"),
    ("6001", "CH340 serial device"),
    ("6000", "USB hub / controller"),
];

static USB_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"VID_([0-9A-Fa-f]{4})&PID_([0-9A-Fa-f]{4})").expect("usb id pattern")
});

/// Resolution of a `VID_xxxx&PID_xxxx` pair found in log text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceId {
    /// Four hex digits, uppercased.
    pub vendor_id: String,
    /// Four hex digits, uppercased.
    pub product_id: String,
    /// Vendor name, or `Unknown Vendor (<id>)` when not in the table.
    pub vendor: String,
    /// Optional device-type hint from the product id.
    pub hint: Option<String>,
}

/// Extracts and resolves the first VID/PID pair in `line`.
///
/// Returns `None` when the line carries no `VID_xxxx&PID_xxxx` pattern.
pub fn resolve_vid_pid(line: &str) -> Option<DeviceId> {
    let captures = USB_ID.captures(line)?;
    let vendor_id = captures[1].to_uppercase();
    let product_id = captures[2].to_uppercase();

    let vendor = VENDORS
        .iter()
        .find(|(id, _)| *id == vendor_id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("Unknown Vendor ({vendor_id})"));
    let hint = PRODUCT_HINTS
        .iter()
        .find(|(id, _)| *id == product_id)
        .map(|(_, hint)| (*hint).to_string());

    Some(DeviceId {
        vendor_id,
        product_id,
        vendor,
        hint,
    })
}
