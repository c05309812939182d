use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use shared_types::DayAvailability;
use thaw::*;

use crate::booking::schedule::is_date_disabled;
use crate::booking::state::BookingWizard;

/// How many months past the current one a visitor may browse.
const MAX_MONTH_OFFSET: i32 = 3;

#[component]
pub fn AvailabilityCalendar(
    #[prop(into)] schedule: Signal<Vec<DayAvailability>>,
    wizard: RwSignal<BookingWizard>,
    min_date: NaiveDate,
    on_date_selected: impl Fn(NaiveDate) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let current_month_offset = RwSignal::new(0i32);

    view! {
        <div class="availability-calendar">
            <div class="calendar-header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        current_month_offset.update(|v| *v -= 1);
                    }
                    disabled=Signal::derive(move || current_month_offset.get() <= 0)
                >
                    "←"
                </Button>

                <div class="month-label">
                    {move || {
                        month_of(min_date, current_month_offset.get()).format("%B %Y").to_string()
                    }}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        current_month_offset.update(|v| *v += 1);
                    }
                    disabled=Signal::derive(move || current_month_offset.get() >= MAX_MONTH_OFFSET)
                >
                    "→"
                </Button>
            </div>

            <div class="calendar-grid">
                <div class="weekday-headers">
                    <div class="weekday-header">"Sun"</div>
                    <div class="weekday-header">"Mon"</div>
                    <div class="weekday-header">"Tue"</div>
                    <div class="weekday-header">"Wed"</div>
                    <div class="weekday-header">"Thu"</div>
                    <div class="weekday-header">"Fri"</div>
                    <div class="weekday-header">"Sat"</div>
                </div>

                <div class="calendar-days">
                    {move || {
                        let month_start = month_of(min_date, current_month_offset.get());
                        let schedule = schedule.get();
                        let selected = wizard.get().selected_date;

                        calendar_days(month_start)
                            .into_iter()
                            .map(|day_opt| {
                                if let Some(date) = day_opt {
                                    let unavailable = is_date_disabled(date, &schedule);
                                    let past = date < min_date;
                                    let disabled = unavailable || past;
                                    let is_selected = selected == Some(date);

                                    view! {
                                        <button
                                            class="calendar-day"
                                            class:available=!disabled
                                            class:unavailable=unavailable
                                            class:past=past
                                            class:selected=is_selected
                                            disabled=disabled
                                            on:click=move |_| {
                                                if !disabled {
                                                    wizard.update(|w| w.select_date(date));
                                                    on_date_selected(date);
                                                }
                                            }
                                        >
                                            {date.day()}
                                        </button>
                                    }.into_any()
                                } else {
                                    view! {
                                        <div class="calendar-day empty"></div>
                                    }.into_any()
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>

            <div class="calendar-footer">
                {move || {
                    match wizard.get().selected_date {
                        None => view! {
                            <p class="no-selection">"Please select an available date"</p>
                        }.into_any(),
                        Some(date) => view! {
                            <p class="selected-info">
                                "Selected: " {date.format("%A, %B %-d").to_string()}
                            </p>
                        }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}

/// First day of the month `offset` months after the anchor date's month.
fn month_of(anchor: NaiveDate, offset: i32) -> NaiveDate {
    let total_months = anchor.year() * 12 + anchor.month0() as i32 + offset;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(anchor)
}

/// Month laid out on a Sunday-first grid: leading `None` cells pad the
/// first week, then one entry per day of the month.
fn calendar_days(month_start: NaiveDate) -> Vec<Option<NaiveDate>> {
    let leading = month_start.weekday().num_days_from_sunday() as usize;
    let mut days: Vec<Option<NaiveDate>> = vec![None; leading];

    let mut date = month_start;
    while date.month() == month_start.month() {
        days.push(Some(date));
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_offsets_roll_over_year_boundaries() {
        let nov = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
        assert_eq!(month_of(nov, 0), NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
        assert_eq!(month_of(nov, 2), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn grid_pads_to_first_weekday() {
        // January 2025 starts on a Wednesday
        let jan = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let days = calendar_days(jan);
        assert_eq!(days.iter().take_while(|d| d.is_none()).count(), 3);
        assert_eq!(days.iter().flatten().count(), 31);
        assert_eq!(days.last().copied().flatten(), NaiveDate::from_ymd_opt(2025, 1, 31));
    }
}
