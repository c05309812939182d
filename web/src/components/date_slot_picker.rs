use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use shared_types::DayAvailability;
use thaw::*;

use crate::booking::schedule::is_date_disabled;
use crate::booking::slots::SlotId;
use crate::booking::state::BookingWizard;
use crate::components::{AvailabilityCalendar, ErrorView, LoadingView, TimeSlotPanel};
use crate::server::get_event_schedule;

/// Calendar plus slot list for one event, driving the booking wizard
/// up to the point where the visitor confirms a slot and moves on.
/// The wizard signal is owned by the surrounding flow so date, slot,
/// and hour-format preference outlive this component.
#[component]
pub fn DateSlotPicker(
    event_id: i32,
    wizard: RwSignal<BookingWizard>,
    #[prop(optional_no_strip)] min_date: Option<NaiveDate>,
    #[prop(optional_no_strip)] default_date: Option<NaiveDate>,
    on_next: impl Fn(SlotId) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    // One fetch per event id; dedup and caching are the resource's job
    let schedule_resource = Resource::new(
        move || event_id,
        move |id| async move { get_event_schedule(id).await },
    );

    // Until the fetch resolves the schedule is empty, which disables
    // every calendar day and renders no slot buttons.
    let schedule = Signal::derive(move || {
        schedule_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || {
        schedule_resource
            .get()
            .and_then(|result| result.err())
            .map(|e| format!("Could not load availability: {}", e))
    });
    let is_pending = Signal::derive(move || schedule_resource.get().is_none());

    let min_date = min_date.unwrap_or_else(|| Local::now().date_naive());

    // Seed the wizard from ?date= once the schedule resolves, but only
    // when the requested day is actually selectable.
    Effect::new(move |_| {
        let loaded = schedule.get();
        if loaded.is_empty() {
            return;
        }
        if let Some(date) = usable_default_date(default_date, min_date, &loaded) {
            if wizard.with_untracked(|w| w.selected_date.is_none()) {
                wizard.update(|w| w.select_date(date));
            }
        }
    });

    view! {
        <div class="date-slot-picker">
            {move || {
                fetch_error.get().map(|message| view! { <ErrorView message=Some(message) /> })
            }}
            {move || {
                is_pending.get().then(|| view! { <LoadingView /> })
            }}

            <div class="date-slot-picker-columns">
                <AvailabilityCalendar
                    schedule=schedule
                    wizard=wizard
                    min_date=min_date
                    on_date_selected=move |_| {}
                />
                <TimeSlotPanel
                    schedule=schedule
                    wizard=wizard
                    on_slot_selected=move |_| {}
                />
            </div>

            <div class="date-slot-picker-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !wizard.get().can_advance())
                    on_click=move |_| {
                        if let Some(slot) = wizard.get().selected_slot {
                            on_next(slot);
                        }
                    }
                >
                    "Next"
                </Button>
            </div>
        </div>
    }
}

/// A requested default date is only honored when it is on or after the
/// minimum date and its weekday is bookable; otherwise the flow starts
/// with no date selected.
fn usable_default_date(
    default_date: Option<NaiveDate>,
    min_date: NaiveDate,
    schedule: &[DayAvailability],
) -> Option<NaiveDate> {
    default_date.filter(|date| *date >= min_date && !is_date_disabled(*date, schedule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Weekday;

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
    fn default_date_on_bookable_day_is_kept() {
        let schedule = vec![day(Weekday::Monday, true, &["09:00"])];
        assert_eq!(
            usable_default_date(Some(monday()), monday(), &schedule),
            Some(monday())
        );
    }

    #[test]
    fn default_date_on_blocked_day_is_ignored() {
        let schedule = vec![day(Weekday::Monday, false, &[])];
        assert_eq!(usable_default_date(Some(monday()), monday(), &schedule), None);

        // No entry for the weekday at all
        let schedule = vec![day(Weekday::Tuesday, true, &["09:00"])];
        assert_eq!(usable_default_date(Some(monday()), monday(), &schedule), None);
    }

    #[test]
    fn default_date_before_minimum_is_ignored() {
        let schedule = vec![day(Weekday::Monday, true, &["09:00"])];
        let later_min = NaiveDate::from_ymd_opt(2025, 1, 21).unwrap();
        assert_eq!(
            usable_default_date(Some(monday()), later_min, &schedule),
            None
        );
    }

    #[test]
    fn no_default_date_stays_unselected() {
        let schedule = vec![day(Weekday::Monday, true, &["09:00"])];
        assert_eq!(usable_default_date(None, monday(), &schedule), None);
    }
}
