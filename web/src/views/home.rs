use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="homepage-container" style="padding: 2rem; max-width: 900px; margin: 0 auto;">
            <div style="text-align: center; margin-bottom: 3rem;">
                <h1 style="font-size: 3rem; margin-bottom: 1rem;">"Slotbook"</h1>
                <p style="font-size: 1.2rem; color: #666; margin-bottom: 2rem;">
                    "Pick a time that works for you"
                </p>
            </div>

            <div style="display: flex; gap: 2rem; justify-content: center; margin-bottom: 3rem;">
                <A href="/book/1">
                    <button class="btn-primary">"Book an Intro Call"</button>
                </A>
            </div>

            <div style="text-align: center; margin-top: 4rem;">
                <p style="color: #888;">
                    "Choose a date, pick a slot, and you're done"
                </p>
            </div>
        </div>
    }
}
