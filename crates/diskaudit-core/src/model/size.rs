//! Size units and number formatting for tables, CSV and progress lines.
//!
//! All internal sizes are `u64` bytes. Floating point is only used
//! at the display-formatting boundary.

/// One mebibyte. The large-file threshold is expressed in these.
pub const MIB: u64 = 1024 * 1024;

/// One gibibyte. Report columns are expressed in these.
pub const GIB: u64 = MIB * 1024;

/// Convert a byte count to GiB rounded to two decimal places.
///
/// This is the unit of the `Size_GB` report column.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    let gb = bytes as f64 / GIB as f64;
    (gb * 100.0).round() / 100.0
}

/// Group the digits of a file count in threes (`12,345`) for the console
/// summary and export notice.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
