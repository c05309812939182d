#![cfg(feature = "ssr")]

use std::path::Path;

use rusqlite::{params, Connection};
use shared_types::{DayAvailability, EventInfo, Weekday};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("event {0} not found")]
    EventNotFound(i32),
}

fn db_path() -> String {
    std::env::var("SLOTBOOK_DB").unwrap_or_else(|_| "slotbook.db".to_string())
}

fn open() -> Result<Connection, RepositoryError> {
    Ok(Connection::open(Path::new(&db_path()))?)
}

/// Create the schema and seed a demo event so a fresh checkout has
/// something to book against.
pub fn init_db() -> Result<(), RepositoryError> {
    let conn = open()?;

    conn.execute(
        "
        CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            duration_minutes INTEGER NOT NULL DEFAULT 30,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
    ",
        [],
    )?;

    conn.execute(
        "
        CREATE TABLE IF NOT EXISTS event_availability (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id INTEGER NOT NULL,
            day_of_week INTEGER NOT NULL,
            start_time TEXT,
            is_available INTEGER NOT NULL DEFAULT 1,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
    ",
        [],
    )?;

    conn.execute(
        "
        CREATE TABLE IF NOT EXISTS bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id INTEGER NOT NULL,
            attendee_name TEXT NOT NULL,
            attendee_email TEXT NOT NULL,
            slot_date TEXT NOT NULL,
            slot_start_time TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
    ",
        [],
    )?;

    let event_count: i32 = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    if event_count == 0 {
        seed_demo_event(&conn)?;
    }

    Ok(())
}

fn seed_demo_event(conn: &Connection) -> Result<(), RepositoryError> {
    conn.execute(
        "INSERT INTO events (name, description, duration_minutes) VALUES (?1, ?2, ?3)",
        params![
            "Intro Call",
            "A 30 minute introductory call with the team",
            30
        ],
    )?;
    let event_id = conn.last_insert_rowid() as i32;

    // Weekdays get morning and afternoon slots; the weekend is blocked out.
    for day in 1..=5 {
        for start_time in ["09:00", "10:00", "11:00", "14:00", "15:00"] {
            conn.execute(
                "INSERT INTO event_availability (event_id, day_of_week, start_time, is_available)
                 VALUES (?1, ?2, ?3, 1)",
                params![event_id, day, start_time],
            )?;
        }
    }
    for day in [0, 6] {
        conn.execute(
            "INSERT INTO event_availability (event_id, day_of_week, start_time, is_available)
             VALUES (?1, ?2, NULL, 0)",
            params![event_id, day],
        )?;
    }

    Ok(())
}

pub fn get_event(event_id: i32) -> Result<EventInfo, RepositoryError> {
    let conn = open()?;

    let mut stmt = conn.prepare(
        "
        SELECT id, name, description, duration_minutes
        FROM events
        WHERE id = ?1
    ",
    )?;

    let mut rows = stmt.query_map([event_id], |row| {
        Ok(EventInfo {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            duration_minutes: row.get(3)?,
        })
    })?;

    match rows.next() {
        Some(event) => Ok(event?),
        None => Err(RepositoryError::EventNotFound(event_id)),
    }
}

/// Read the weekly schedule for an event, grouped into one entry per
/// weekday. Rows are ordered by day then start time so slot order is
/// stable; a NULL start time carries only the day's availability flag.
pub fn get_weekly_availability(event_id: i32) -> Result<Vec<DayAvailability>, RepositoryError> {
    let conn = open()?;

    let mut stmt = conn.prepare(
        "
        SELECT day_of_week, start_time, is_available
        FROM event_availability
        WHERE event_id = ?1
        ORDER BY day_of_week, start_time
    ",
    )?;

    let row_iter = stmt.query_map([event_id], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, Option<String>>(1)?,
            row.get::<_, bool>(2)?,
        ))
    })?;

    let mut schedule: Vec<DayAvailability> = Vec::new();
    for row in row_iter {
        let (day_number, start_time, is_available) = row?;
        let Some(day) = u8::try_from(day_number)
            .ok()
            .and_then(Weekday::from_number)
        else {
            // Out-of-range weekday numbers degrade to "no entry"
            continue;
        };

        let index = match schedule.iter().position(|e| e.day == day) {
            Some(index) => index,
            None => {
                schedule.push(DayAvailability {
                    day,
                    is_available,
                    slots: Vec::new(),
                });
                schedule.len() - 1
            }
        };
        let entry = &mut schedule[index];

        entry.is_available = entry.is_available && is_available;
        if let Some(start_time) = start_time {
            entry.slots.push(start_time);
        }
    }

    Ok(schedule)
}

pub fn insert_booking(
    event_id: i32,
    attendee_name: &str,
    attendee_email: &str,
    slot_date: &str,
    slot_start_time: &str,
) -> Result<i32, RepositoryError> {
    let conn = open()?;

    conn.execute(
        "
        INSERT INTO bookings (event_id, attendee_name, attendee_email, slot_date, slot_start_time)
        VALUES (?1, ?2, ?3, ?4, ?5)
    ",
        params![
            event_id,
            attendee_name,
            attendee_email,
            slot_date,
            slot_start_time
        ],
    )?;

    Ok(conn.last_insert_rowid() as i32)
}
