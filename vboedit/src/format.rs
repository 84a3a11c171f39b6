//! Textual formatting of numeric channels.
//!
//! Values in the `[data]` section are written exactly as they will be read
//! back, so each derived channel commits to one fixed format.

/// Zero-pads an integer to a minimum width.
///
/// The width is a minimum: longer numbers are never truncated.
///
/// ```
/// use vboedit::format::pad_with_zeros;
///
/// assert_eq!(pad_with_zeros(42, 4), "0042");
/// assert_eq!(pad_with_zeros(123456, 4), "123456");
/// ```
pub fn pad_with_zeros(number: i64, width: usize) -> String {
    format!("{:0width$}", number, width = width)
}

/// Formats a heading (or any signed degree value) with 2 decimals,
/// zero-padded to a minimum width of 5 characters.
///
/// A leading minus sign counts towards the width.
pub fn format_heading(degrees: f64) -> String {
    format!("{:05.2}", degrees)
}

/// Formats a value with a fixed number of decimals and no padding.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Rounds a value the way it would read back after [`format_fixed`].
pub fn round_as_written(value: f64, decimals: usize) -> f64 {
    format_fixed(value, decimals).parse().unwrap_or(value)
}
