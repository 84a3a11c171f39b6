//! Decoding of VBOX `HHMMSS.CC` timestamps.
//!
//! The VBOX `time` channel stores UTC time of day as hours, minutes, seconds
//! and centiseconds packed into one decimal string, e.g. `094559.96`.
//! Decoding is plain arithmetic: out-of-range minutes or seconds are
//! accepted as-is.

use crate::error::{VboError, VboResult};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;
const MS_PER_CENTISECOND: i64 = 10;

/// Converts a `HHMMSS.CC` timestamp to total milliseconds.
///
/// The integer part is left-padded with zeros to 6 digits and the first six
/// digits are read as hours, minutes and seconds. The fractional part is
/// right-padded to 2 digits and read as centiseconds; it defaults to 0 when
/// absent.
///
/// # Examples
///
/// ```
/// use vboedit::timecode::to_milliseconds;
///
/// assert_eq!(to_milliseconds("094559.96").unwrap(), 34_199_960);
/// assert_eq!(to_milliseconds("000001.5").unwrap(), 1_050);
/// ```
pub fn to_milliseconds(timestamp: &str) -> VboResult<i64> {
    let trimmed = timestamp.trim();
    let invalid = || VboError::InvalidTimestamp(timestamp.to_string());

    let (main, centis) = match trimmed.split_once('.') {
        Some((main, centis)) => (main, centis),
        None => (trimmed, "00"),
    };
    if centis.contains('.') {
        return Err(invalid());
    }

    let main = format!("{:0>6}", main);
    let centis = format!("{:0<2}", centis);

    let hours = parse_digits(main.get(0..2)).ok_or_else(invalid)?;
    let minutes = parse_digits(main.get(2..4)).ok_or_else(invalid)?;
    let seconds = parse_digits(main.get(4..6)).ok_or_else(invalid)?;
    let centiseconds = parse_digits(Some(&centis)).ok_or_else(invalid)?;

    // The fraction has no width limit, so its scaled value can overflow.
    centiseconds
        .checked_mul(MS_PER_CENTISECOND)
        .and_then(|ms| ms.checked_add(hours * MS_PER_HOUR))
        .and_then(|ms| ms.checked_add(minutes * MS_PER_MINUTE))
        .and_then(|ms| ms.checked_add(seconds * MS_PER_SECOND))
        .ok_or_else(invalid)
}

/// Converts a `HHMMSS.CC` timestamp to seconds.
pub fn to_seconds(timestamp: &str) -> VboResult<f64> {
    Ok(to_milliseconds(timestamp)? as f64 / 1000.0)
}

fn parse_digits(digits: Option<&str>) -> Option<i64> {
    let digits = digits?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_timestamp() {
        assert_eq!(to_milliseconds("094559.96").unwrap(), 34_199_960);
    }

    #[test]
    fn test_midnight_without_fraction() {
        assert_eq!(to_milliseconds("000000").unwrap(), 0);
    }

    #[test]
    fn test_single_digit_fraction_is_right_padded() {
        assert_eq!(to_milliseconds("000001.5").unwrap(), 1_050);
    }

    #[test]
    fn test_short_integer_part_is_left_padded() {
        // "5.00" reads as 000005.00
        assert_eq!(to_milliseconds("5.00").unwrap(), 5_000);
        assert_eq!(to_milliseconds("130.10").unwrap(), 90_100);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(to_milliseconds("  000002.00 ").unwrap(), 2_000);
    }

    #[test]
    fn test_out_of_range_minutes_are_accepted() {
        // 99 minutes decodes arithmetically rather than failing
        assert_eq!(to_milliseconds("009900.00").unwrap(), 99 * 60_000);
    }

    #[test]
    fn test_empty_fraction_is_zero() {
        assert_eq!(to_milliseconds("000003.").unwrap(), 3_000);
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(matches!(
            to_milliseconds("12ab56.00"),
            Err(VboError::InvalidTimestamp(_))
        ));
        assert!(to_milliseconds("000001.0.1").is_err());
        assert!(to_milliseconds("").is_err());
    }

    #[test]
    fn test_overlong_fraction_is_rejected() {
        // 18 fraction digits parse as i64 but overflow once scaled
        assert!(matches!(
            to_milliseconds("000000.999999999999999999"),
            Err(VboError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            to_milliseconds("000000.99999999999999999999"),
            Err(VboError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_to_seconds() {
        assert!((to_seconds("000001.50").unwrap() - 1.5).abs() < 1e-12);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_decode_is_arithmetic_of_digit_groups(
                hh in 0i64..100,
                mm in 0i64..100,
                ss in 0i64..100,
                cc in 0i64..100
            ) {
                let stamp = format!("{:02}{:02}{:02}.{:02}", hh, mm, ss, cc);
                let expected = hh * 3_600_000 + mm * 60_000 + ss * 1_000 + cc * 10;
                prop_assert_eq!(to_milliseconds(&stamp)?, expected);
            }
        }
    }
}
