//! Due-date normalization between the ISO 8601 wire profile and the
//! calendar components the Reminders store keys dates by.
//!
//! ## Lossy conversion
//!
//! A due string such as `2026-02-05T09:00:00+09:00` is parsed to an absolute
//! instant and then decomposed into wall-clock components of the process's
//! local zone. The store records only those components, so the original
//! `+09:00` offset is gone once stored: reading the item back yields the same
//! instant expressed in the reader's local zone, not the offset it was
//! written with.
//!
//! ## Lenient parsing
//!
//! Malformed due and repeat-end values are treated as absent rather than
//! failing the command. Callers log a warning and carry on.

use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

use crate::model::{DueComponents, Scope};

const WIRE_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const SHORT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";
const END_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a due string with an explicit UTC offset (`Z` or `±HH:MM`).
pub fn parse_due(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| DateTime::parse_from_str(trimmed, SHORT_OFFSET_FORMAT))
        .ok()
}

/// Wall-clock reading of `instant` in `zone`.
pub fn to_local_components<Tz: TimeZone>(
    instant: &DateTime<FixedOffset>,
    zone: &Tz,
) -> DueComponents {
    DueComponents::from_naive(instant.with_timezone(zone).naive_local())
}

/// Parses a due flag and decomposes it for storage. `None` when malformed.
pub fn normalize_due<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DueComponents> {
    match parse_due(raw) {
        Some(instant) => Some(to_local_components(&instant, zone)),
        None => {
            tracing::warn!(value = raw, "ignoring malformed due date");
            None
        }
    }
}

/// Parses a bare `YYYY-MM-DD` repeat end. `None` when malformed.
pub fn parse_repeat_end(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), END_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!(value = raw, "ignoring malformed repeat end date");
            None
        }
    }
}

/// Reads a timestamp reported by an adapter.
///
/// Adapters answer either with an RFC 3339 stamp or with bare local
/// wall-clock text; the latter is pinned to `zone`.
pub fn parse_store_stamp<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(instant) = parse_due(trimmed) {
        return Some(instant);
    }
    let naive = NaiveDateTime::parse_from_str(trimmed, WIRE_LOCAL_FORMAT).ok()?;
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.fixed_offset())
}

/// Time window a list scope selects, in absolute instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    end_inclusive: bool,
}

impl Window {
    pub fn contains(&self, instant: &DateTime<FixedOffset>) -> bool {
        let instant = instant.with_timezone(&Utc);
        if instant < self.start {
            return false;
        }
        if self.end_inclusive {
            instant <= self.end
        } else {
            instant < self.end
        }
    }
}

/// `today` is the local calendar day of `now`; `week` is
/// `[now - 1 day, now + 7 days]` inclusive, the one-day lookback keeping
/// just-missed items visible. `all` has no window.
pub fn scope_window<Tz: TimeZone>(scope: Scope, now: DateTime<Utc>, zone: &Tz) -> Option<Window> {
    match scope {
        Scope::All => None,
        Scope::Week => Some(Window {
            start: now - Duration::days(1),
            end: now + Duration::days(7),
            end_inclusive: true,
        }),
        Scope::Today => {
            let today = now.with_timezone(zone).date_naive();
            let tomorrow = today.succ_opt().unwrap_or(today);
            Some(Window {
                start: local_midnight(zone, today),
                end: local_midnight(zone, tomorrow),
                end_inclusive: false,
            })
        }
    }
}

fn local_midnight<Tz: TimeZone>(zone: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    fn fixed(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    #[test]
    fn test_parse_due_with_offset() {
        let instant = parse_due("2026-02-05T09:00:00+09:00").unwrap();
        assert_eq!(instant.with_timezone(&Utc), utc("2026-02-05T00:00:00Z"));
    }

    #[test]
    fn test_parse_due_without_seconds() {
        let instant = parse_due("2026-02-05T09:30+01:00").unwrap();
        assert_eq!(instant.with_timezone(&Utc), utc("2026-02-05T08:30:00Z"));
    }

    #[test]
    fn test_parse_due_zulu() {
        assert!(parse_due("2026-02-05T09:00:00Z").is_some());
    }

    // Lenient on purpose: a bad due value is dropped, not reported.
    #[test]
    fn test_malformed_due_is_treated_as_absent() {
        let zone = FixedOffset::east_opt(0).unwrap();
        assert_eq!(normalize_due("tomorrow at nine", &zone), None);
        assert_eq!(normalize_due("2026-02-05", &zone), None);
        assert_eq!(normalize_due("2026-02-05T09:00:00", &zone), None);
        assert_eq!(normalize_due("", &zone), None);
    }

    #[test]
    fn test_due_is_stored_as_wall_clock_of_local_zone() {
        // Process zone pinned to UTC-05:00.
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let due = normalize_due("2026-02-05T09:00:00+09:00", &zone).unwrap();
        assert_eq!(
            due,
            DueComponents {
                year: 2026,
                month: 2,
                day: 4,
                hour: 19,
                minute: 0,
                second: 0,
            }
        );
    }

    #[test]
    fn test_due_offset_is_not_retained() {
        let zone = FixedOffset::east_opt(0).unwrap();
        let due = normalize_due("2026-02-05T09:00:00+09:00", &zone).unwrap();
        assert_eq!(due.to_wire(), "2026-02-05T00:00:00");

        let read_back = parse_store_stamp(&due.to_wire(), &zone).unwrap();
        assert_eq!(read_back.offset().local_minus_utc(), 0);
        assert_eq!(read_back, fixed("2026-02-05T09:00:00+09:00"));
    }

    #[test]
    fn test_parse_repeat_end() {
        assert_eq!(
            parse_repeat_end("2026-03-31"),
            NaiveDate::from_ymd_opt(2026, 3, 31)
        );
    }

    // Lenient on purpose, same as due dates.
    #[test]
    fn test_malformed_repeat_end_is_treated_as_absent() {
        assert_eq!(parse_repeat_end("2026-13-01"), None);
        assert_eq!(parse_repeat_end("next month"), None);
    }

    #[test]
    fn test_store_stamp_accepts_offset_text() {
        let zone = FixedOffset::east_opt(3600).unwrap();
        let stamp = parse_store_stamp("2026-02-05T09:00:00+09:00", &zone).unwrap();
        assert_eq!(stamp.offset().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_store_stamp_rejects_garbage() {
        let zone = FixedOffset::east_opt(0).unwrap();
        assert_eq!(parse_store_stamp("soon", &zone), None);
        assert_eq!(parse_store_stamp("", &zone), None);
    }

    #[test]
    fn test_week_window_keeps_one_day_lookback() {
        let zone = FixedOffset::east_opt(0).unwrap();
        let now = utc("2026-02-10T12:00:00Z");
        let window = scope_window(Scope::Week, now, &zone).unwrap();

        assert!(window.contains(&fixed("2026-02-09T12:00:00Z")));
        assert!(!window.contains(&fixed("2026-02-09T11:59:59Z")));
        assert!(window.contains(&fixed("2026-02-17T12:00:00Z")));
        assert!(!window.contains(&fixed("2026-02-17T12:00:01Z")));
    }

    #[test]
    fn test_today_window_follows_local_calendar_day() {
        let zone = FixedOffset::east_opt(9 * 3600).unwrap();
        // 20:00 UTC on the 10th is already the 11th in +09:00.
        let now = utc("2026-02-10T20:00:00Z");
        let window = scope_window(Scope::Today, now, &zone).unwrap();

        assert!(window.contains(&fixed("2026-02-11T00:00:00+09:00")));
        assert!(window.contains(&fixed("2026-02-11T23:59:59+09:00")));
        assert!(!window.contains(&fixed("2026-02-12T00:00:00+09:00")));
        assert!(!window.contains(&fixed("2026-02-10T23:59:59+09:00")));
    }

    #[test]
    fn test_all_scope_has_no_window() {
        let zone = FixedOffset::east_opt(0).unwrap();
        assert!(scope_window(Scope::All, Utc::now(), &zone).is_none());
    }
}
