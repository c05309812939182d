use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use thaw::*;

#[component]
pub fn BookingConfirmation() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    // Extract booking ID from URL query parameters
    let booking_id = move || {
        query
            .get()
            .get("booking_id")
            .and_then(|id| id.parse::<i32>().ok())
    };

    view! {
        <div class="booking-confirmation-container">
            <div class="booking-confirmation-content">
                <div class="booking-confirmation-header">
                    <div class="booking-confirmation-success-icon">
                        "✓"
                    </div>
                    <h1 class="booking-confirmation-title">
                        "Booking Confirmed!"
                    </h1>
                    <p class="booking-confirmation-subtitle">
                        "Your time slot has been reserved"
                    </p>
                </div>

                <div class="booking-confirmation-details">
                    {move || {
                        if let Some(id) = booking_id() {
                            view! {
                                <div class="booking-confirmation-reference">
                                    <h2 class="booking-confirmation-reference-title">
                                        "Booking Reference"
                                    </h2>
                                    <p class="booking-confirmation-reference-number">
                                        {format!("#{}", id)}
                                    </p>
                                    <p class="booking-confirmation-reference-note">
                                        "Save this reference number for your records"
                                    </p>
                                </div>
                            }.into_any()
                        } else {
                            view! {}.into_any()
                        }
                    }}

                    <div class="booking-confirmation-next-steps">
                        <h2 class="booking-confirmation-section-title">
                            "What happens next?"
                        </h2>
                        <div class="booking-confirmation-steps">
                            <div class="booking-confirmation-step">
                                <div class="booking-confirmation-step-number">"1"</div>
                                <div class="booking-confirmation-step-content">
                                    <h3>"Confirmation Email"</h3>
                                    <p>"You'll receive an email with the meeting details shortly"</p>
                                </div>
                            </div>
                            <div class="booking-confirmation-step">
                                <div class="booking-confirmation-step-number">"2"</div>
                                <div class="booking-confirmation-step-content">
                                    <h3>"Calendar Invite"</h3>
                                    <p>"Add the appointment to your calendar so you don't miss it"</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="booking-confirmation-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/", Default::default());
                            }
                        }
                    >
                        "Return Home"
                    </Button>
                </div>
            </div>
        </div>
    }
}
