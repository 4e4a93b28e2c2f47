//! Moment.js-style date formatting for daily-note file names.
//!
//! Users configure the daily-note name with the token syntax they know from
//! their note-taking host (`YYYY-MM-DD`, `dddd, MMMM Do YYYY`, ...). This
//! module turns such a pattern plus a timestamp into a string. Text wrapped
//! in `[...]` is copied literally; characters that do not start a known token
//! are copied unchanged.

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use crate::defaults;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Recognized tokens. Longer tokens precede their prefixes so the first
/// match is the longest one.
const TOKENS: [&str; 37] = [
    "YYYY", "YY", "Q", "MMMM", "MMM", "MM", "M", "DDDD", "DDD", "DD", "Do", "D", "dddd", "ddd",
    "dd", "d", "E", "GGGG", "GG", "WW", "W", "HH", "H", "hh", "h", "kk", "k", "mm", "m", "ss", "s",
    "A", "a", "X", "x", "ZZ", "Z",
];

/// Format `datetime` according to a moment-style `pattern`.
pub fn format_moment<Tz: TimeZone>(datetime: &DateTime<Tz>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(first) = rest.chars().next() {
        if first == '[' {
            if let Some(end) = rest.find(']') {
                out.push_str(&rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        match TOKENS.iter().find(|token| rest.starts_with(*token)) {
            Some(token) => {
                out.push_str(&render_token(datetime, token));
                rest = &rest[token.len()..];
            }
            None => {
                out.push(first);
                rest = &rest[first.len_utf8()..];
            }
        }
    }

    out
}

/// Vault path of the daily note for `datetime`: the formatted name plus `.md`.
pub fn daily_note_path<Tz: TimeZone>(datetime: &DateTime<Tz>, pattern: &str) -> String {
    format!(
        "{}{}",
        format_moment(datetime, pattern),
        defaults::DAILY_NOTE_EXTENSION
    )
}

fn render_token<Tz: TimeZone>(dt: &DateTime<Tz>, token: &str) -> String {
    let month0 = dt.month0() as usize;
    let weekday = dt.weekday().num_days_from_sunday() as usize;
    let iso_week = dt.iso_week();

    match token {
        "YYYY" => format!("{:04}", dt.year()),
        "YY" => format!("{:02}", dt.year().rem_euclid(100)),
        "Q" => (month0 / 3 + 1).to_string(),
        "MMMM" => MONTH_NAMES[month0].to_string(),
        "MMM" => MONTH_NAMES[month0][..3].to_string(),
        "MM" => format!("{:02}", dt.month()),
        "M" => dt.month().to_string(),
        "DDDD" => format!("{:03}", dt.ordinal()),
        "DDD" => dt.ordinal().to_string(),
        "DD" => format!("{:02}", dt.day()),
        "Do" => ordinal(dt.day()),
        "D" => dt.day().to_string(),
        "dddd" => WEEKDAY_NAMES[weekday].to_string(),
        "ddd" => WEEKDAY_NAMES[weekday][..3].to_string(),
        "dd" => WEEKDAY_NAMES[weekday][..2].to_string(),
        "d" => weekday.to_string(),
        "E" => dt.weekday().number_from_monday().to_string(),
        "GGGG" => format!("{:04}", iso_week.year()),
        "GG" => format!("{:02}", iso_week.year().rem_euclid(100)),
        "WW" => format!("{:02}", iso_week.week()),
        "W" => iso_week.week().to_string(),
        "HH" => format!("{:02}", dt.hour()),
        "H" => dt.hour().to_string(),
        "hh" => format!("{:02}", dt.hour12().1),
        "h" => dt.hour12().1.to_string(),
        "kk" => format!("{:02}", hour_1_to_24(dt.hour())),
        "k" => hour_1_to_24(dt.hour()).to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "s" => dt.second().to_string(),
        "A" => (if dt.hour12().0 { "PM" } else { "AM" }).to_string(),
        "a" => (if dt.hour12().0 { "pm" } else { "am" }).to_string(),
        "X" => dt.timestamp().to_string(),
        "x" => dt.timestamp_millis().to_string(),
        "ZZ" => utc_offset(dt, ""),
        "Z" => utc_offset(dt, ":"),
        other => other.to_string(),
    }
}

fn hour_1_to_24(hour: u32) -> u32 {
    if hour == 0 {
        24
    } else {
        hour
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn utc_offset<Tz: TimeZone>(dt: &DateTime<Tz>, separator: &str) -> String {
    let seconds = dt.offset().fix().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("{}{:02}{}{:02}", sign, minutes / 60, separator, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn jan_15_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 3).unwrap()
    }

    #[test]
    fn test_default_format() {
        assert_eq!(format_moment(&jan_15_2024(), "YYYY-MM-DD"), "2024-01-15");
    }

    #[test]
    fn test_daily_note_path_appends_extension() {
        assert_eq!(
            daily_note_path(&jan_15_2024(), "YYYY-MM-DD"),
            "2024-01-15.md"
        );
    }

    #[test]
    fn test_nested_folder_format() {
        assert_eq!(
            daily_note_path(&jan_15_2024(), "YYYY/MM/YYYY-MM-DD"),
            "2024/01/2024-01-15.md"
        );
    }

    #[test]
    fn test_names_and_ordinals() {
        assert_eq!(
            format_moment(&jan_15_2024(), "dddd, MMMM Do YYYY"),
            "Monday, January 15th 2024"
        );
        assert_eq!(format_moment(&jan_15_2024(), "ddd MMM D"), "Mon Jan 15");
        assert_eq!(format_moment(&jan_15_2024(), "dd"), "Mo");
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(31), "31st");
    }

    #[test]
    fn test_bracket_escapes() {
        assert_eq!(
            format_moment(&jan_15_2024(), "[Daily] YYYY [Week] W"),
            "Daily 2024 Week 3"
        );
    }

    #[test]
    fn test_unclosed_bracket_is_literal() {
        assert_eq!(format_moment(&jan_15_2024(), "[YYYY"), "[2024");
    }

    #[test]
    fn test_time_tokens() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 0, 7, 9).unwrap();
        assert_eq!(format_moment(&dt, "HH:mm:ss"), "00:07:09");
        assert_eq!(format_moment(&dt, "h:m:s a"), "12:7:9 am");
        assert_eq!(format_moment(&dt, "kk"), "24");

        let afternoon = Utc.with_ymd_and_hms(2024, 1, 15, 15, 30, 0).unwrap();
        assert_eq!(format_moment(&afternoon, "hh:mm A"), "03:30 PM");
    }

    #[test]
    fn test_day_of_year_and_quarter() {
        let dt = Utc.with_ymd_and_hms(2024, 11, 2, 0, 0, 0).unwrap();
        assert_eq!(format_moment(&dt, "DDDD"), "307");
        assert_eq!(format_moment(&dt, "DDD"), "307");
        assert_eq!(format_moment(&dt, "Q"), "4");
        assert_eq!(format_moment(&jan_15_2024(), "DDDD"), "015");
    }

    #[test]
    fn test_iso_week_year_boundary() {
        // 2024-12-30 belongs to ISO week 1 of 2025
        let dt = Utc.with_ymd_and_hms(2024, 12, 30, 0, 0, 0).unwrap();
        assert_eq!(format_moment(&dt, "GGGG-[W]WW"), "2025-W01");
        assert_eq!(format_moment(&dt, "YY"), "24");
        assert_eq!(format_moment(&dt, "E d"), "1 1");
    }

    #[test]
    fn test_offsets() {
        let tz = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        let dt = tz.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();
        assert_eq!(format_moment(&dt, "Z"), "-05:30");
        assert_eq!(format_moment(&dt, "ZZ"), "-0530");
        assert_eq!(format_moment(&jan_15_2024(), "Z"), "+00:00");
    }

    #[test]
    fn test_unix_timestamps() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(format_moment(&dt, "X"), "1705276800");
        assert_eq!(format_moment(&dt, "x"), "1705276800000");
    }

    #[test]
    fn test_unknown_characters_copied() {
        assert_eq!(format_moment(&jan_15_2024(), "Log_YYYY"), "Log_2024");
        assert_eq!(format_moment(&jan_15_2024(), "été-DD"), "été-15");
        assert_eq!(format_moment(&jan_15_2024(), ""), "");
    }
}
