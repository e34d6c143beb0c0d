// Small browser-side helpers.

use wasm_bindgen::JsValue;

use crate::model::Region;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// "Aug 30, 2026, 10:45 AM" style header timestamp.
pub fn current_date_label() -> String {
    let now = js_sys::Date::new_0();
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let month = MONTHS[(now.get_month() as usize).min(11)];
    let hours = now.get_hours();
    let (h12, ampm) = match hours {
        0 => (12, "AM"),
        1..=11 => (hours, "AM"),
        12 => (12, "PM"),
        _ => (hours - 12, "PM"),
    };
    format!(
        "{} {}, {}, {}:{:02} {}",
        month,
        now.get_date(),
        now.get_full_year(),
        h12,
        now.get_minutes(),
        ampm
    )
}

/// Mock report export: dumps the current snapshot as JSON to the console
/// and tells the user. No file download in the mock build.
pub fn export_report(regions: &[Region]) {
    match serde_json::to_string_pretty(regions) {
        Ok(json) => clog(&format!("export: {json}")),
        Err(e) => clog(&format!("export failed: {e}")),
    }
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message("Exporting report as CSV...");
    }
}
