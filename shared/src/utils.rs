// Small helpers used wherever upload metadata is shown to a user.

const BYTE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Renders a byte count in the largest whole base-1024 unit (up to GB) with two decimals.
/// `0` is rendered as `"0 Bytes"`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor: u64 = 1;
    while unit + 1 < BYTE_UNITS.len() && bytes >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }

    format!("{:.2} {}", bytes as f64 / divisor as f64, BYTE_UNITS[unit])
}
