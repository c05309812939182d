use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Clock display preference, global to the session.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum HourFormat {
    H12,
    H24,
}

impl HourFormat {
    pub fn toggled(&self) -> HourFormat {
        match self {
            HourFormat::H12 => HourFormat::H24,
            HourFormat::H24 => HourFormat::H12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HourFormat::H12 => "12h",
            HourFormat::H24 => "24h",
        }
    }
}

/// Opaque identifier for a bookable slot: the date it was chosen under
/// plus the "HH:MM" start time, joined as "YYYY-MM-DDTHH:MM". A slot id
/// is only meaningful for its own date; the wizard discards it whenever
/// the date changes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SlotId(String);

impl SlotId {
    pub fn encode(date: NaiveDate, start_time: &str) -> SlotId {
        SlotId(format!("{}T{}", date.format("%Y-%m-%d"), start_time))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn decode(&self) -> Option<(NaiveDate, NaiveTime)> {
        let (date_part, time_part) = self.0.split_once('T')?;
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(time_part, "%H:%M").ok()?;
        Some((date, time))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.decode().map(|(date, _)| date)
    }

    /// The raw "HH:MM" start time, without validating it.
    pub fn start_time(&self) -> Option<&str> {
        self.0.split_once('T').map(|(_, time)| time)
    }
}

/// Format an "HH:MM" start time for display. Malformed input falls back
/// to the original string rather than erroring.
pub fn format_start_time(time: &str, format: HourFormat) -> String {
    match format {
        HourFormat::H24 => time.to_string(),
        HourFormat::H12 => {
            let Some((hour_str, minute_str)) = time.split_once(':') else {
                return time.to_string();
            };
            let Ok(hour) = hour_str.parse::<u32>() else {
                return time.to_string();
            };
            let Ok(minute) = minute_str.parse::<u32>() else {
                return time.to_string();
            };
            if hour > 23 || minute > 59 || minute_str.len() != 2 {
                return time.to_string();
            }

            let (hour_12, period) = match hour {
                0 => (12, "AM"),
                1..=11 => (hour, "AM"),
                12 => (12, "PM"),
                _ => (hour - 12, "PM"),
            };
            format!("{}:{} {}", hour_12, minute_str, period)
        }
    }
}

/// Format a start time with the viewer's timezone appended. UTC is the
/// assumed baseline and never shown.
pub fn format_start_time_in_zone(time: &str, format: HourFormat, tz_abbr: &str) -> String {
    let formatted = format_start_time(time, format);
    if tz_abbr.is_empty() || tz_abbr == "UTC" {
        formatted
    } else {
        format!("{} {}", formatted, tz_abbr)
    }
}

/// Long-form rendering of a slot for the confirmation step, e.g.
/// "Monday, January 20, 2025 at 9:00 AM". Falls back to the raw id when
/// the slot does not decode.
pub fn format_slot_long(slot: &SlotId, format: HourFormat, tz_abbr: &str) -> String {
    match slot.decode() {
        Some((date, _)) => {
            let time = slot.start_time().unwrap_or_default();
            format!(
                "{} at {}",
                date.format("%A, %B %-d, %Y"),
                format_start_time_in_zone(time, format, tz_abbr)
            )
        }
        None => slot.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    #[test]
    fn encode_then_decode_preserves_date_and_time() {
        let slot = SlotId::encode(jan_20(), "09:30");
        assert_eq!(slot.as_str(), "2025-01-20T09:30");
        let (date, time) = slot.decode().unwrap();
        assert_eq!(date, jan_20());
        assert_eq!(time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(slot.start_time(), Some("09:30"));
    }

    #[test]
    fn malformed_slot_does_not_decode() {
        assert!(SlotId("not-a-slot".to_string()).decode().is_none());
        assert!(SlotId("2025-01-20T25:99".to_string()).decode().is_none());
    }

    #[test]
    fn twelve_hour_format_keeps_minutes() {
        assert_eq!(format_start_time("09:00", HourFormat::H12), "9:00 AM");
        assert_eq!(format_start_time("10:00", HourFormat::H12), "10:00 AM");
        assert_eq!(format_start_time("14:45", HourFormat::H12), "2:45 PM");
    }

    #[test]
    fn twelve_hour_format_edges() {
        assert_eq!(format_start_time("00:00", HourFormat::H12), "12:00 AM");
        assert_eq!(format_start_time("12:00", HourFormat::H12), "12:00 PM");
        assert_eq!(format_start_time("23:59", HourFormat::H12), "11:59 PM");
    }

    #[test]
    fn twenty_four_hour_format_is_verbatim() {
        assert_eq!(format_start_time("09:00", HourFormat::H24), "09:00");
        assert_eq!(format_start_time("23:59", HourFormat::H24), "23:59");
    }

    #[test]
    fn malformed_time_falls_back_to_input() {
        assert_eq!(format_start_time("soon", HourFormat::H12), "soon");
        assert_eq!(format_start_time("25:00", HourFormat::H12), "25:00");
        assert_eq!(format_start_time("09:xx", HourFormat::H12), "09:xx");
        assert_eq!(format_start_time("09:99", HourFormat::H12), "09:99");
        assert_eq!(format_start_time("9:5", HourFormat::H12), "9:5");
    }

    #[test]
    fn timezone_appended_unless_utc() {
        assert_eq!(
            format_start_time_in_zone("09:00", HourFormat::H12, "EST"),
            "9:00 AM EST"
        );
        assert_eq!(
            format_start_time_in_zone("09:00", HourFormat::H12, "UTC"),
            "9:00 AM"
        );
        assert_eq!(
            format_start_time_in_zone("09:00", HourFormat::H24, ""),
            "09:00"
        );
    }

    #[test]
    fn long_form_includes_weekday_and_date() {
        let slot = SlotId::encode(jan_20(), "09:00");
        assert_eq!(
            format_slot_long(&slot, HourFormat::H12, "UTC"),
            "Monday, January 20, 2025 at 9:00 AM"
        );
    }
}
