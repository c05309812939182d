use chrono::NaiveDate;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};
use thaw::*;

use crate::booking::slots::SlotId;
use crate::booking::state::BookingWizard;
use crate::components::{DateSlotPicker, ErrorView, LoadingView};
use crate::server::{get_event, submit_booking, NewBooking};

/// Public booking page for one event: pick a date and slot, then leave
/// attendee details. Submitting navigates to the confirmation view.
#[component]
pub fn EventBooking() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();

    let event_id = Memo::new(move |_| {
        params
            .read()
            .get("event_id")
            .and_then(|id| id.parse::<i32>().ok())
            .unwrap_or(0)
    });

    // Optional ?date= and ?min_date= query parameters seed the picker
    let default_date = move || {
        query
            .get()
            .get("date")
            .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok())
    };
    let min_date = move || {
        query
            .get()
            .get("min_date")
            .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok())
    };

    let event_resource = Resource::new(
        move || event_id.get(),
        move |id| async move { get_event(id).await },
    );

    // Booking state outlives the picker: date, slot, hour format, and
    // timezone all persist into the attendee step
    let wizard = RwSignal::new(BookingWizard::new());

    // Wizard step: 1 = date/slot picker, 2 = attendee details
    let current_step = RwSignal::new(1);
    let confirmed_slot = RwSignal::new(None::<SlotId>);

    // Attendee form state
    let attendee_name = RwSignal::new(String::new());
    let attendee_email = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let submission_error = RwSignal::new(None::<String>);

    let submit = Action::new(move |booking: &NewBooking| {
        let booking = booking.clone();
        async move { submit_booking(booking).await }
    });

    let handle_submit = move || {
        if let Some(slot) = confirmed_slot.get() {
            is_submitting.set(true);
            submission_error.set(None);

            submit.dispatch(NewBooking {
                event_id: event_id.get(),
                attendee_name: attendee_name.get(),
                attendee_email: attendee_email.get(),
                slot,
            });
        }
    };

    // Handle submission result
    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            is_submitting.set(false);
            match result {
                Ok(booking_id) => {
                    navigate(
                        &format!(
                            "/book/{}/confirm?booking_id={}",
                            event_id.get(),
                            booking_id
                        ),
                        Default::default(),
                    );
                }
                Err(e) => {
                    submission_error.set(Some(format!("Failed to submit booking: {}", e)));
                }
            }
        }
    });

    let is_form_valid = move || {
        !attendee_name.get().trim().is_empty() && !attendee_email.get().trim().is_empty()
    };
    let is_button_disabled = Memo::new(move |_| !is_form_valid() || is_submitting.get());

    view! {
        <div class="event-booking-container">
            <div class="event-booking-header">
                <Suspense fallback=move || view! {
                    <LoadingView message=Some("Loading event...".to_string()) />
                }>
                    {move || {
                        event_resource.get().map(|event_result| match event_result {
                            Ok(event) => view! {
                                <div class="event-info">
                                    <h2>{event.name.clone()}</h2>
                                    <p class="event-duration">{format!("{} minutes", event.duration_minutes)}</p>
                                    {event.description.clone().map(|description| view! {
                                        <p class="event-description">{description}</p>
                                    })}
                                </div>
                            }.into_any(),
                            Err(e) => view! {
                                <ErrorView message=Some(format!("Could not load event: {}", e)) />
                            }.into_any(),
                        })
                    }}
                </Suspense>
            </div>

            {move || match current_step.get() {
                1 => view! {
                    <DateSlotPicker
                        event_id=event_id.get()
                        wizard=wizard
                        min_date=min_date()
                        default_date=default_date()
                        on_next=move |slot| {
                            confirmed_slot.set(Some(slot));
                            current_step.set(2);
                        }
                    />
                }.into_any(),
                _ => view! {
                    <div class="attendee-form">
                        {move || {
                            wizard.get().slot_summary().map(|summary| view! {
                                <p class="slot-summary">{summary}</p>
                            })
                        }}

                        <form class="attendee-form-content" on:submit=move |ev| {
                            ev.prevent_default();
                            if is_form_valid() {
                                handle_submit();
                            }
                        }>
                            <div class="form-group">
                                <label for="attendee-name">"Full Name *"</label>
                                <Input
                                    id="attendee-name"
                                    placeholder="Your full name"
                                    value=attendee_name
                                />
                            </div>
                            <div class="form-group">
                                <label for="attendee-email">"Email Address *"</label>
                                <Input
                                    id="attendee-email"
                                    input_type=InputType::Email
                                    placeholder="your@email.com"
                                    value=attendee_email
                                />
                            </div>

                            {move || {
                                submission_error.get().map(|error| view! {
                                    <div class="error-message">
                                        <p>{error}</p>
                                    </div>
                                })
                            }}

                            <div class="form-actions">
                                <Button
                                    button_type=ButtonType::Submit
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::from(is_button_disabled)
                                    loading=is_submitting
                                >
                                    {move || if is_submitting.get() { "Booking..." } else { "Confirm Booking" }}
                                </Button>
                            </div>
                        </form>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
