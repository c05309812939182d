use serde::{Deserialize, Serialize};

/// Day of the week as used by weekly availability schedules.
/// Numbered 0..=6 starting from Sunday, matching the calendar grid.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// 0 = Sunday .. 6 = Saturday, the ordering stored in the database.
    pub fn number(&self) -> u8 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Weekday> {
        Weekday::ALL.get(n as usize).copied()
    }
}

/// One weekday's worth of bookable slots. `slots` holds "HH:MM"
/// start times in the order the event organizer configured them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayAvailability {
    pub day: Weekday,
    pub is_available: bool,
    pub slots: Vec<String>,
}

/// Public details for a bookable event, shown in the booking page header.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventInfo {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
}
