use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{DayAvailability, EventInfo};

use crate::booking::slots::SlotId;

#[server]
pub async fn get_event(event_id: i32) -> Result<EventInfo, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::repository::get_event as query_event;

        match query_event(event_id) {
            Ok(event) => Ok(event),
            Err(e) => Err(ServerFnError::new(format!("Failed to load event: {}", e))),
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = event_id;
        Err(ServerFnError::new("Server function called on the client"))
    }
}

/// Weekly availability for an event. The client fetches this once per
/// event id through a `Resource`; the resource handles caching and
/// request dedup, this function just reads.
#[server]
pub async fn get_event_schedule(event_id: i32) -> Result<Vec<DayAvailability>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::repository::get_weekly_availability;

        match get_weekly_availability(event_id) {
            Ok(schedule) => Ok(schedule),
            Err(e) => Err(ServerFnError::new(format!(
                "Failed to load availability: {}",
                e
            ))),
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = event_id;
        Ok(vec![])
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewBooking {
    pub event_id: i32,
    pub attendee_name: String,
    pub attendee_email: String,
    pub slot: SlotId,
}

#[server]
pub async fn submit_booking(booking: NewBooking) -> Result<i32, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::db::repository::insert_booking;

        let Some((date, _)) = booking.slot.decode() else {
            return Err(ServerFnError::new(format!(
                "Invalid slot identifier: {}",
                booking.slot.as_str()
            )));
        };
        let start_time = booking.slot.start_time().unwrap_or_default();

        match insert_booking(
            booking.event_id,
            booking.attendee_name.trim(),
            booking.attendee_email.trim(),
            &date.format("%Y-%m-%d").to_string(),
            start_time,
        ) {
            Ok(booking_id) => {
                tracing::info!(
                    event_id = booking.event_id,
                    booking_id,
                    slot = booking.slot.as_str(),
                    "booking recorded"
                );
                Ok(booking_id)
            }
            Err(e) => Err(ServerFnError::new(format!("Failed to save booking: {}", e))),
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = booking;
        Err(ServerFnError::new("Server function called on the client"))
    }
}
