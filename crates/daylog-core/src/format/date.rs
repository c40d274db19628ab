//! Timestamp rendering with the `yyyy-MM-dd HH:mm:ss.SSS` token language

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Pattern used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd HH:mm:ss.SSS";

/// Pattern used to name daily log files
pub const FILE_DATE_FORMAT: &str = "yyyy-MM-dd";

/// Render `instant` according to `pattern`
///
/// Recognized tokens are `yyyy`, `MM`, `dd`, `HH`, `mm`, `ss` and `SSS`.
/// They are substituted one after another in that order, and only the first
/// occurrence of each token is replaced. Anything else passes through as-is,
/// so a malformed pattern never fails; it just keeps its literal text.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use daylog_core::format::render_date;
///
/// let instant = NaiveDate::from_ymd_opt(2022, 12, 20)
///     .unwrap()
///     .and_hms_milli_opt(14, 32, 45, 32)
///     .unwrap();
/// assert_eq!(render_date("dd/MM/yyyy HH:mm", &instant), "20/12/2022 14:32");
/// ```
pub fn render_date(pattern: &str, instant: &NaiveDateTime) -> String {
    // Each value is digits only, so no substitution can create a token that a
    // later step would pick up.
    let tokens = [
        ("yyyy", format!("{:04}", instant.year())),
        ("MM", format!("{:02}", instant.month())),
        ("dd", format!("{:02}", instant.day())),
        ("HH", format!("{:02}", instant.hour())),
        ("mm", format!("{:02}", instant.minute())),
        ("ss", format!("{:02}", instant.second())),
        ("SSS", format!("{:03}", millisecond(instant))),
    ];

    tokens
        .iter()
        .fold(pattern.to_string(), |rendered, (token, value)| {
            rendered.replacen(token, value, 1)
        })
}

// Leap seconds show up as nanos >= 1e9.
fn millisecond(instant: &NaiveDateTime) -> u32 {
    (instant.nanosecond() / 1_000_000) % 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    fn reference() -> NaiveDateTime {
        at(2022, 12, 20, 14, 32, 45, 32)
    }

    #[test]
    fn test_single_tokens() {
        let instant = reference();
        assert_eq!(render_date("yyyy", &instant), "2022");
        assert_eq!(render_date("MM", &instant), "12");
        assert_eq!(render_date("dd", &instant), "20");
        assert_eq!(render_date("HH", &instant), "14");
        assert_eq!(render_date("mm", &instant), "32");
        assert_eq!(render_date("ss", &instant), "45");
        assert_eq!(render_date("SSS", &instant), "032");
    }

    #[test]
    fn test_default_pattern() {
        let instant = at(2022, 1, 1, 1, 1, 1, 1);
        assert_eq!(render_date(DEFAULT_DATE_FORMAT, &instant), "2022-01-01 01:01:01.001");
        assert_eq!(render_date(FILE_DATE_FORMAT, &instant), "2022-01-01");
    }

    #[test]
    fn test_custom_order() {
        let instant = at(2022, 1, 1, 1, 1, 1, 1);
        assert_eq!(
            render_date("dd/MM/yyyy HH:mm:ss.SSS", &instant),
            "01/01/2022 01:01:01.001"
        );
    }

    #[test]
    fn test_quoted_literal_passes_through() {
        let instant = reference();
        assert_eq!(
            render_date("yyyy MM SSS ss HH dd mm 'yyyy'", &instant),
            "2022 12 032 45 14 20 32 'yyyy'"
        );
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        let instant = reference();
        assert_eq!(render_date("yyyy yyyy", &instant), "2022 yyyy");
        assert_eq!(render_date("HH HH mm", &instant), "14 HH 32");
    }

    #[test]
    fn test_unrecognized_text() {
        let instant = reference();
        assert_eq!(render_date("", &instant), "");
        assert_eq!(render_date("no tokens here", &instant), "no tokens here");
        assert_eq!(render_date("YYYY-DD", &instant), "YYYY-DD");
    }

    #[test]
    fn test_zero_padding() {
        let instant = at(2022, 3, 4, 5, 6, 7, 8);
        assert_eq!(render_date(DEFAULT_DATE_FORMAT, &instant), "2022-03-04 05:06:07.008");

        let midnight = at(2022, 1, 22, 0, 0, 0, 0);
        assert_eq!(render_date("HH:mm:ss.SSS", &midnight), "00:00:00.000");
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(render_date("MM", &at(2022, 1, 22, 0, 0, 0, 0)), "01");
        assert_eq!(render_date("MM", &at(2022, 12, 22, 0, 0, 0, 0)), "12");
    }

    #[test]
    fn test_substituted_digits_are_not_tokens() {
        // Month 12 followed by literal text that looks like later tokens.
        let instant = reference();
        assert_eq!(render_date("MMss", &instant), "1245");
    }
}
