use chatrisk_core::{Error, MessageRecord, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Export line grammar: `<date>, <time> - <sender>: <message>`, with a
/// day-first 1-2 digit day/month, 2 or 4 digit year, and an optional
/// case-insensitive am/pm suffix on the time.
static MESSAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?:\s?[APap][Mm])?)\s-\s(.*?):\s(.*)")
        .expect("message line pattern compiles")
});

/// Parse one export line into a [`MessageRecord`].
///
/// Returns `None` for anything that does not match the grammar or whose
/// date/time is not a valid calendar timestamp. This is a deliberate
/// lossy filter: continuation lines of wrapped messages, system
/// notices, and malformed dates are all silently dropped.
pub fn parse_line(line: &str) -> Option<MessageRecord> {
    let caps = MESSAGE_LINE.captures(line)?;

    let timestamp = parse_timestamp(caps.get(1)?.as_str(), caps.get(2)?.as_str())?;
    let sender = caps.get(3)?.as_str().to_string();
    if sender.is_empty() {
        return None;
    }
    let message = caps.get(4)?.as_str().to_string();

    Some(MessageRecord {
        timestamp,
        sender,
        message,
    })
}

/// Parse the full (already decoded) document into ordered records.
///
/// Applies [`parse_line`] to each line independently and keeps the input
/// order of every match. An empty result is a valid outcome, not an
/// error; callers decide how to report "no data".
pub fn parse_document(text: &str) -> Vec<MessageRecord> {
    let mut line_count = 0usize;
    let records: Vec<MessageRecord> = text
        .lines()
        .inspect(|_| line_count += 1)
        .filter_map(parse_line)
        .collect();
    debug!(
        parsed = records.len(),
        lines = line_count,
        "parsed chat document"
    );
    records
}

/// Decode raw export bytes and parse them into ordered records.
///
/// Invalid UTF-8 is the one fatal input error; per-line parse failures
/// are filtered out silently.
pub fn load_records(bytes: &[u8]) -> Result<Vec<MessageRecord>> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::Decode(e.to_string()))?;
    Ok(parse_document(text))
}

fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(NaiveDateTime::new(
        parse_dayfirst_date(date)?,
        parse_clock_time(time)?,
    ))
}

/// Day-first numeric date. Two-digit years pivot at 68 (00-68 maps to
/// 2000-2068, 69-99 to 1969-1999, chrono's `%y` convention); three-digit
/// years are rejected.
fn parse_dayfirst_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year_str = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let year: i32 = year_str.parse().ok()?;
    let year = match year_str.len() {
        2 if year <= 68 => 2000 + year,
        2 => 1900 + year,
        4 => year,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// `H:MM` clock time with an optional am/pm suffix. Suffixed times must
/// use a 1-12 hour; unsuffixed times are 24-hour.
fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let lower = s.to_ascii_lowercase();
    let (clock, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else {
        (lower.as_str(), None)
    };

    let (h, m) = clock.split_once(':')?;
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;

    let hour = match meridiem {
        None => hour,
        Some(_) if hour == 0 || hour > 12 => return None,
        Some(true) => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
        Some(false) => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn well_formed_line_captures_all_fields() {
        let record = parse_line("12/3/2024, 14:05 - Alice: see you tonight").unwrap();
        assert_eq!(record.sender, "Alice");
        assert_eq!(record.message, "see you tonight");
        assert_eq!(record.timestamp.day(), 12);
        assert_eq!(record.timestamp.month(), 3);
        assert_eq!(record.timestamp.year(), 2024);
        assert_eq!(record.timestamp.hour(), 14);
        assert_eq!(record.timestamp.minute(), 5);
    }

    #[test]
    fn sender_runs_to_first_colon_only() {
        let record = parse_line("1/1/2024, 9:00 - Bob: note: call me").unwrap();
        assert_eq!(record.sender, "Bob");
        assert_eq!(record.message, "note: call me");
    }

    #[test]
    fn am_pm_suffix_with_and_without_space() {
        let pm = parse_line("5/6/23, 7:30 PM - Ana: hi").unwrap();
        assert_eq!(pm.timestamp.hour(), 19);
        let pm_nospace = parse_line("5/6/23, 7:30pm - Ana: hi").unwrap();
        assert_eq!(pm_nospace.timestamp.hour(), 19);
        let am = parse_line("5/6/23, 7:30 am - Ana: hi").unwrap();
        assert_eq!(am.timestamp.hour(), 7);
    }

    #[test]
    fn twelve_am_and_pm_convert_correctly() {
        let midnight = parse_line("5/6/23, 12:10 am - Ana: hi").unwrap();
        assert_eq!(midnight.timestamp.hour(), 0);
        let noon = parse_line("5/6/23, 12:10 pm - Ana: hi").unwrap();
        assert_eq!(noon.timestamp.hour(), 12);
    }

    #[test]
    fn two_digit_year_pivots_at_68() {
        let recent = parse_line("1/2/24, 10:00 - A: x").unwrap();
        assert_eq!(recent.timestamp.year(), 2024);
        let old = parse_line("1/2/99, 10:00 - A: x").unwrap();
        assert_eq!(old.timestamp.year(), 1999);
    }

    #[test]
    fn ambiguous_dates_are_day_first() {
        let record = parse_line("3/4/2024, 10:00 - A: x").unwrap();
        assert_eq!(record.timestamp.day(), 3);
        assert_eq!(record.timestamp.month(), 4);
    }

    #[test]
    fn invalid_calendar_dates_yield_no_record() {
        // Month 13 is never valid: day-first is strict, no fallback.
        assert!(parse_line("1/13/2024, 10:00 - A: x").is_none());
        assert!(parse_line("31/2/2024, 10:00 - A: x").is_none());
        assert!(parse_line("31/4/2024, 25:00 - A: x").is_none());
        // 13 o'clock with a meridiem suffix is not a 12-hour time.
        assert!(parse_line("1/2/2024, 13:00 pm - A: x").is_none());
    }

    #[test]
    fn malformed_lines_yield_no_record() {
        assert!(parse_line("this is a continuation of a wrapped message").is_none());
        assert!(parse_line("12/3/2024, 14:05 - no colon here").is_none());
        assert!(parse_line("2024-03-12, 14:05 - Alice: wrong date separator").is_none());
        assert!(parse_line("12/3/2024 14:05 - Alice: missing comma").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn document_preserves_order_and_drops_noise() {
        let text = "12/3/2024, 14:05 - Alice: first\n\
                    garbage line\n\
                    12/3/2024, 14:07 - Bob: second\n\
                    \n\
                    13/3/2024, 9:00 - Alice: third";
        let records = parse_document(text);
        assert_eq!(records.len(), 3);
        assert!(records.len() <= text.lines().count());
        let senders: Vec<&str> = records.iter().map(|r| r.sender.as_str()).collect();
        assert_eq!(senders, ["Alice", "Bob", "Alice"]);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[2].message, "third");
    }

    #[test]
    fn empty_parse_is_a_valid_outcome() {
        let records = parse_document("nothing here\nor here");
        assert!(records.is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_fatal_decode_error() {
        let err = load_records(&[0x31, 0x2f, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn valid_bytes_load_like_text() {
        let records = load_records("1/2/2024, 10:00 - A: hello".as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "hello");
    }
}
