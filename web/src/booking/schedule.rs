use chrono::{Datelike, NaiveDate};
use shared_types::{DayAvailability, Weekday};

/// Map a calendar date onto the schedule's weekday enum.
pub fn weekday_of(date: NaiveDate) -> Weekday {
    match date.weekday() {
        chrono::Weekday::Sun => Weekday::Sunday,
        chrono::Weekday::Mon => Weekday::Monday,
        chrono::Weekday::Tue => Weekday::Tuesday,
        chrono::Weekday::Wed => Weekday::Wednesday,
        chrono::Weekday::Thu => Weekday::Thursday,
        chrono::Weekday::Fri => Weekday::Friday,
        chrono::Weekday::Sat => Weekday::Saturday,
    }
}

/// First schedule entry matching the date's weekday. Uniqueness per
/// weekday is assumed but not enforced, so first match wins.
pub fn day_entry(date: NaiveDate, schedule: &[DayAvailability]) -> Option<&DayAvailability> {
    let day = weekday_of(date);
    schedule.iter().find(|entry| entry.day == day)
}

/// Bookable start times for the selected date, in the order the
/// organizer configured them. Empty when no date is selected, when the
/// weekday has no entry, or when the entry is marked unavailable.
pub fn slots_for_date(date: Option<NaiveDate>, schedule: &[DayAvailability]) -> Vec<String> {
    let Some(date) = date else {
        return Vec::new();
    };

    day_entry(date, schedule)
        .filter(|entry| entry.is_available)
        .map(|entry| entry.slots.clone())
        .unwrap_or_default()
}

/// Whether the calendar should grey out a candidate date. A date is
/// disabled when its weekday has no schedule entry or the entry is
/// flagged unavailable. An empty (or still-loading) schedule disables
/// every date.
pub fn is_date_disabled(date: NaiveDate, schedule: &[DayAvailability]) -> bool {
    day_entry(date, schedule)
        .map(|entry| !entry.is_available)
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(day: Weekday, is_available: bool, slots: &[&str]) -> DayAvailability {
        DayAvailability {
            day,
            is_available,
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    // 2025-01-20 is a Monday
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    #[test]
    fn weekday_mapping_matches_calendar() {
        assert_eq!(weekday_of(monday()), Weekday::Monday);
        let sunday = NaiveDate::from_ymd_opt(2025, 1, 19).unwrap();
        assert_eq!(weekday_of(sunday), Weekday::Sunday);
    }

    #[test]
    fn slots_returned_verbatim_for_available_day() {
        let schedule = vec![
            day(Weekday::Sunday, false, &[]),
            day(Weekday::Monday, true, &["10:00", "09:00", "10:00"]),
        ];
        // No sorting, no dedup
        assert_eq!(
            slots_for_date(Some(monday()), &schedule),
            vec!["10:00", "09:00", "10:00"]
        );
    }

    #[test]
    fn no_selected_date_yields_no_slots() {
        let schedule = vec![day(Weekday::Monday, true, &["09:00"])];
        assert!(slots_for_date(None, &schedule).is_empty());
    }

    #[test]
    fn unavailable_day_yields_no_slots() {
        let schedule = vec![day(Weekday::Monday, false, &["09:00"])];
        assert!(slots_for_date(Some(monday()), &schedule).is_empty());
    }

    #[test]
    fn missing_weekday_entry_yields_no_slots() {
        let schedule = vec![day(Weekday::Tuesday, true, &["09:00"])];
        assert!(slots_for_date(Some(monday()), &schedule).is_empty());
    }

    #[test]
    fn first_matching_entry_wins_on_duplicates() {
        let schedule = vec![
            day(Weekday::Monday, true, &["08:00"]),
            day(Weekday::Monday, true, &["13:00"]),
        ];
        assert_eq!(slots_for_date(Some(monday()), &schedule), vec!["08:00"]);
    }

    #[test]
    fn date_disabled_without_entry_or_when_flagged_off() {
        let schedule = vec![
            day(Weekday::Monday, true, &["09:00"]),
            day(Weekday::Tuesday, false, &[]),
        ];
        let tuesday = NaiveDate::from_ymd_opt(2025, 1, 21).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2025, 1, 22).unwrap();

        assert!(!is_date_disabled(monday(), &schedule));
        assert!(is_date_disabled(tuesday, &schedule));
        assert!(is_date_disabled(wednesday, &schedule));
    }

    #[test]
    fn empty_schedule_disables_all_dates() {
        assert!(is_date_disabled(monday(), &[]));
        assert!(slots_for_date(Some(monday()), &[]).is_empty());
    }
}
