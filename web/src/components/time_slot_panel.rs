use leptos::prelude::*;
use shared_types::DayAvailability;
use thaw::*;

use crate::booking::schedule::slots_for_date;
use crate::booking::slots::SlotId;
use crate::booking::state::BookingWizard;
use crate::utils::timezone::{format_time_with_timezone, get_timezone_abbreviation};

#[component]
pub fn TimeSlotPanel(
    #[prop(into)] schedule: Signal<Vec<DayAvailability>>,
    wizard: RwSignal<BookingWizard>,
    on_slot_selected: impl Fn(SlotId) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let timezone = get_timezone_abbreviation();

    // Keep the wizard's timezone in sync with client-side detection
    Effect::new(move |_| {
        let tz_abbr = timezone.get();
        wizard.update(|w| w.set_timezone(tz_abbr));
    });

    view! {
        <div class="time-slot-panel">
            <div class="time-slot-panel-header">
                <h4>"Available Time Slots"</h4>
                <Button
                    class="hour-format-toggle"
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        wizard.update(|w| {
                            let format = w.hour_format.toggled();
                            w.set_hour_format(format);
                        });
                    }
                >
                    {move || wizard.get().hour_format.toggled().label()}
                </Button>
                <p class="time-slot-panel-subtitle">
                    {move || {
                        match wizard.get().selected_date {
                            None => "Please select a date first".to_string(),
                            Some(date) => {
                                format!("Available times for {}", date.format("%A, %B %-d"))
                            }
                        }
                    }}
                </p>
            </div>

            <div class="time-slot-panel-content">
                {move || {
                    let state = wizard.get();
                    let Some(date) = state.selected_date else {
                        return view! {
                            <div class="time-slot-panel-empty">
                                <p>"Pick a date on the calendar to see times."</p>
                            </div>
                        }.into_any();
                    };

                    let slots = slots_for_date(Some(date), &schedule.get());

                    if slots.is_empty() {
                        view! {
                            <div class="time-slot-panel-empty">
                                <p>"No available time slots for this date."</p>
                                <p class="time-slot-panel-suggestion">"Please try selecting a different date."</p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="time-slot-panel-grid">
                                {slots.into_iter().map(|start_time| {
                                    let slot = SlotId::encode(date, &start_time);
                                    let slot_for_click = slot.clone();
                                    let is_selected = state.selected_slot.as_ref() == Some(&slot);
                                    let label = format_time_with_timezone(
                                        &start_time,
                                        state.hour_format,
                                        timezone,
                                    );

                                    view! {
                                        <Button
                                            class=if is_selected { "time-slot-button selected" } else { "time-slot-button" }
                                            appearance=if is_selected { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                                            on_click=move |_| {
                                                wizard.update(|w| {
                                                    w.select_slot(slot_for_click.clone());
                                                });
                                                on_slot_selected(slot_for_click.clone());
                                            }
                                        >
                                            <span class="time-slot-time">{label}</span>
                                        </Button>
                                    }
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
