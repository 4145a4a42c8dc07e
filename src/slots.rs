//! Date and time-slot planning for the booking form.
//!
//! Everything here is a pure function of its inputs: the caller passes the
//! current wall-clock instant explicitly, so the rules are deterministic and
//! testable with a fixed clock.

use chrono::{Days, Duration, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

/// Earliest selectable hour of the day.
pub const OPENING_HOUR: u32 = 9;
/// Latest selectable start-of-slot hour.
pub const CLOSING_HOUR: u32 = 23;
/// Minutes a start slot stays selectable after its nominal start has passed.
pub const START_GRACE_MINUTES: i64 = 20;
/// End-time value meaning "end of day", i.e. midnight of the next day.
pub const MIDNIGHT_SENTINEL: &str = "00:00";
/// How many dates the form offers, counting from today.
pub const DATE_OPTION_COUNT: u64 = 7;

/// A selectable calendar date (`YYYY-MM-DD`) with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOption {
    pub value: String,
    pub label: String,
}

/// A selectable `HH:MM` time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please choose a date, a start time and an end time")]
    MissingFields,
    #[error("the end time must be after the start time")]
    EndBeforeStart,
}

/// The in-progress booking selection held by the form. Discarded on
/// submission or when the user navigates away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl BookingDraft {
    pub fn for_date(date: String) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Switching the date discards any previously chosen times, so a time
    /// picked for one day can never leak into another.
    pub fn select_date(&mut self, date: String) {
        self.date = Some(date);
        self.start_time = None;
        self.end_time = None;
    }

    /// Choosing a start always rewrites the end with the derived default,
    /// even if the end was edited by hand.
    pub fn select_start(&mut self, start_time: String) {
        self.end_time = default_end_time(&start_time);
        self.start_time = Some(start_time);
    }

    pub fn select_end(&mut self, end_time: String) {
        self.end_time = Some(end_time);
    }

    /// Drop the chosen times but keep the date, returning the form to slot
    /// selection. Used after the server reports a conflict.
    pub fn clear_times(&mut self) {
        self.start_time = None;
        self.end_time = None;
    }

    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.start_time.is_some() && self.end_time.is_some()
    }
}

/// Current wall-clock instant in the viewer's timezone.
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// `YYYY-MM-DD` built from local date components, never from a UTC
/// serialization, so a booking made at 00:15 reports today's date.
pub fn local_date_string(instant: NaiveDateTime) -> String {
    instant.date().format("%Y-%m-%d").to_string()
}

/// Display label for a date relative to `now`'s local date.
pub fn date_label(now: NaiveDateTime, date: NaiveDate) -> String {
    let today = now.date();
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.checked_add_days(Days::new(1)) {
        "Tomorrow".to_string()
    } else {
        date.format("%a %-d %b").to_string()
    }
}

/// The seven selectable dates starting at `now`'s local date.
pub fn date_options(now: NaiveDateTime) -> Vec<DateOption> {
    (0..DATE_OPTION_COUNT)
        .filter_map(|offset| now.date().checked_add_days(Days::new(offset)))
        .map(|date| DateOption {
            value: date.format("%Y-%m-%d").to_string(),
            label: date_label(now, date),
        })
        .collect()
}

/// Start times from 09:00 to 23:00 at 30-minute steps. For today, slots
/// whose start has passed by more than the grace window are dropped.
pub fn start_time_options(now: NaiveDateTime, selected_date: &str) -> Vec<TimeOption> {
    let filter_today = selected_date == local_date_string(now);
    let mut times = Vec::new();
    for hour in OPENING_HOUR..=CLOSING_HOUR {
        for minute in [0u32, 30] {
            if hour == CLOSING_HOUR && minute == 30 {
                break;
            }
            if filter_today && !start_selectable(now, hour, minute) {
                continue;
            }
            times.push(time_option(hour, minute));
        }
    }
    times
}

fn start_selectable(now: NaiveDateTime, hour: u32, minute: u32) -> bool {
    let Some(candidate) = now.date().and_hms_opt(hour, minute, 0) else {
        return false;
    };
    let grace_deadline = candidate + Duration::minutes(START_GRACE_MINUTES);
    candidate > now || now < grace_deadline
}

/// End times from 09:00 to 23:30 at 30-minute steps. For today only
/// strictly-future end times survive (no grace window here, unlike start
/// times). For other days a trailing midnight sentinel is offered.
pub fn end_time_options(now: NaiveDateTime, selected_date: &str) -> Vec<TimeOption> {
    let filter_today = selected_date == local_date_string(now);
    let mut times = Vec::new();
    for hour in OPENING_HOUR..=CLOSING_HOUR {
        for minute in [0u32, 30] {
            if filter_today
                && (hour < now.hour() || (hour == now.hour() && minute <= now.minute()))
            {
                continue;
            }
            times.push(time_option(hour, minute));
        }
    }
    if !filter_today {
        times.push(TimeOption {
            value: MIDNIGHT_SENTINEL.to_string(),
            label: MIDNIGHT_SENTINEL.to_string(),
        });
    }
    times
}

/// Suggested end time: one hour after the chosen start, or the midnight
/// sentinel when that would run past the end of the day.
pub fn default_end_time(start_time: &str) -> Option<String> {
    let (hour, minute) = parse_hhmm(start_time)?;
    let end_hour = hour + 1;
    if end_hour >= 24 {
        Some(MIDNIGHT_SENTINEL.to_string())
    } else {
        Some(format!("{end_hour:02}:{minute:02}"))
    }
}

/// When the slot actually ends; the midnight sentinel resolves to the start
/// of the following day.
pub fn slot_end_datetime(date: NaiveDate, end_time: &str) -> Option<NaiveDateTime> {
    if end_time == MIDNIGHT_SENTINEL {
        return date
            .checked_add_days(Days::new(1))
            .and_then(|next| next.and_hms_opt(0, 0, 0));
    }
    let (hour, minute) = parse_hhmm(end_time)?;
    date.and_hms_opt(hour, minute, 0)
}

pub fn validate_draft(draft: &BookingDraft) -> Result<(), ValidationError> {
    if draft.date.is_none() {
        return Err(ValidationError::MissingFields);
    }
    let (Some(start), Some(end)) = (&draft.start_time, &draft.end_time) else {
        return Err(ValidationError::MissingFields);
    };
    if end_of_day_key(start) >= end_of_day_key(end) {
        return Err(ValidationError::EndBeforeStart);
    }
    Ok(())
}

/// Ordering key under which the midnight sentinel sorts after every
/// same-day `HH:MM`.
fn end_of_day_key(time: &str) -> &str {
    if time == MIDNIGHT_SENTINEL {
        "24:00"
    } else {
        time
    }
}

fn time_option(hour: u32, minute: u32) -> TimeOption {
    let value = format!("{hour:02}:{minute:02}");
    TimeOption {
        label: value.clone(),
        value,
    }
}

fn parse_hhmm(value: &str) -> Option<(u32, u32)> {
    let (hour, minute) = value.split_once(':')?;
    Some((hour.parse().ok()?, minute.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .expect("valid date")
            .and_hms_opt(hour, minute, 0)
            .expect("valid time")
    }

    fn values(options: &[TimeOption]) -> Vec<&str> {
        options.iter().map(|option| option.value.as_str()).collect()
    }

    #[test]
    fn local_date_string_uses_local_components_near_midnight() {
        let just_after_midnight = at(2025, 6, 2, 0, 0) + Duration::seconds(30);
        assert_eq!(local_date_string(just_after_midnight), "2025-06-02");
        let just_before_midnight = at(2025, 6, 1, 23, 59);
        assert_eq!(local_date_string(just_before_midnight), "2025-06-01");
        // Stable under repeated calls.
        assert_eq!(
            local_date_string(just_before_midnight),
            local_date_string(just_before_midnight)
        );
    }

    #[test]
    fn date_options_are_seven_ascending_days() {
        let now = at(2025, 6, 1, 14, 0);
        let options = date_options(now);
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].value, "2025-06-01");
        assert_eq!(options[0].label, "Today");
        assert_eq!(options[1].label, "Tomorrow");
        for pair in options.windows(2) {
            assert!(pair[0].value < pair[1].value);
        }
        assert_eq!(options[6].value, "2025-06-07");
    }

    #[test]
    fn date_options_span_month_boundaries() {
        let now = at(2025, 1, 29, 9, 0);
        let options = date_options(now);
        assert_eq!(options[3].value, "2025-02-01");
    }

    #[test]
    fn start_options_unfiltered_for_other_days() {
        let now = at(2025, 6, 1, 22, 0);
        let options = start_time_options(now, "2025-06-02");
        assert_eq!(options.len(), 29);
        assert_eq!(options[0].value, "09:00");
        assert_eq!(options[28].value, "23:00");
    }

    #[test]
    fn start_options_keep_slots_within_grace_window() {
        // 10:05: the 10:00 slot started 5 minutes ago, still inside the
        // 20-minute grace window; 09:00 and 09:30 are stale.
        let now = at(2025, 6, 1, 10, 5);
        let start_options = start_time_options(now, "2025-06-01");
        let options = values(&start_options);
        assert!(options.contains(&"10:00"));
        assert!(!options.contains(&"09:30"));
        assert!(!options.contains(&"09:00"));
    }

    #[test]
    fn start_options_keep_future_slots() {
        let now = at(2025, 6, 1, 9, 59);
        let start_options = start_time_options(now, "2025-06-01");
        let options = values(&start_options);
        assert!(options.contains(&"10:00"));
        // 09:30 + 20 minutes of grace runs out at 09:50.
        assert!(!options.contains(&"09:30"));
    }

    #[test]
    fn start_options_at_grace_boundary() {
        // Exactly 20 minutes after the slot start the grace window has
        // elapsed: now == deadline is no longer "within".
        let now = at(2025, 6, 1, 10, 20);
        let start_options = start_time_options(now, "2025-06-01");
        let options = values(&start_options);
        assert!(!options.contains(&"10:00"));
        assert!(options.contains(&"10:30"));
    }

    #[test]
    fn end_options_for_other_days_include_midnight_sentinel() {
        let now = at(2025, 6, 1, 14, 0);
        let options = end_time_options(now, "2025-06-02");
        assert_eq!(options.len(), 31);
        assert_eq!(options[0].value, "09:00");
        assert_eq!(options[29].value, "23:30");
        assert_eq!(options[30].value, MIDNIGHT_SENTINEL);
    }

    #[test]
    fn end_options_today_are_strictly_future_with_no_grace() {
        let now = at(2025, 6, 1, 14, 0);
        let end_options = end_time_options(now, "2025-06-01");
        let options = values(&end_options);
        // 14:00 equals the current minute and is dropped; no grace window
        // applies to end times.
        assert_eq!(options.first(), Some(&"14:30"));
        assert!(!options.contains(&"14:00"));
        assert!(!options.contains(&MIDNIGHT_SENTINEL));
        assert_eq!(options.len(), 19);
    }

    #[test]
    fn default_end_time_is_one_hour_later() {
        assert_eq!(default_end_time("14:00").as_deref(), Some("15:00"));
        assert_eq!(default_end_time("14:30").as_deref(), Some("15:30"));
        assert_eq!(default_end_time("23:00").as_deref(), Some(MIDNIGHT_SENTINEL));
        assert_eq!(default_end_time("23:30").as_deref(), Some(MIDNIGHT_SENTINEL));
        assert_eq!(default_end_time("not a time"), None);
    }

    #[test]
    fn validate_rejects_missing_fields() {
        let mut draft = BookingDraft::default();
        assert_eq!(validate_draft(&draft), Err(ValidationError::MissingFields));
        draft.select_date("2025-01-01".to_string());
        assert_eq!(validate_draft(&draft), Err(ValidationError::MissingFields));
    }

    #[test]
    fn validate_rejects_end_before_start() {
        let draft = BookingDraft {
            date: Some("2025-01-01".to_string()),
            start_time: Some("10:00".to_string()),
            end_time: Some("09:00".to_string()),
        };
        assert_eq!(validate_draft(&draft), Err(ValidationError::EndBeforeStart));

        let equal = BookingDraft {
            end_time: Some("10:00".to_string()),
            ..draft
        };
        assert_eq!(validate_draft(&equal), Err(ValidationError::EndBeforeStart));
    }

    #[test]
    fn validate_accepts_midnight_sentinel_as_latest_end() {
        let draft = BookingDraft {
            date: Some("2025-01-01".to_string()),
            start_time: Some("10:00".to_string()),
            end_time: Some(MIDNIGHT_SENTINEL.to_string()),
        };
        assert_eq!(validate_draft(&draft), Ok(()));
    }

    #[test]
    fn selecting_start_fills_default_end() {
        let mut draft = BookingDraft::for_date("2025-06-01".to_string());
        draft.select_start("15:00".to_string());
        assert_eq!(draft.end_time.as_deref(), Some("16:00"));
        assert!(draft.is_complete());
    }

    #[test]
    fn reselecting_start_overwrites_manual_end() {
        let mut draft = BookingDraft::for_date("2025-06-01".to_string());
        draft.select_start("15:00".to_string());
        draft.select_end("18:30".to_string());
        draft.select_start("16:00".to_string());
        assert_eq!(draft.end_time.as_deref(), Some("17:00"));
    }

    #[test]
    fn changing_date_clears_both_times() {
        let mut draft = BookingDraft::for_date("2025-06-01".to_string());
        draft.select_start("15:00".to_string());
        draft.select_end("17:00".to_string());
        draft.select_date("2025-06-03".to_string());
        assert_eq!(draft.date.as_deref(), Some("2025-06-03"));
        assert_eq!(draft.start_time, None);
        assert_eq!(draft.end_time, None);
        assert!(!draft.is_complete());
    }

    #[test]
    fn slot_end_datetime_resolves_sentinel_to_next_day() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        assert_eq!(
            slot_end_datetime(date, MIDNIGHT_SENTINEL),
            Some(at(2025, 6, 2, 0, 0))
        );
        assert_eq!(slot_end_datetime(date, "17:30"), Some(at(2025, 6, 1, 17, 30)));
        assert_eq!(slot_end_datetime(date, "bogus"), None);
    }
}
