use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page with a pointer back to the booking flow
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 1rem;">
            <div style="max-width: 600px; width: 100%; text-align: center;">
                <div style="font-size: 8rem; font-weight: 900; color: #2d3748; margin: 0; line-height: 1;">
                    "404"
                </div>

                <h1 style="font-size: 2.5rem; font-weight: 700; color: #2d3748; margin: 1rem 0;">
                    "Page Not Found"
                </h1>

                <p style="font-size: 1.2rem; color: #4a5568; margin: 0 0 2rem 0; line-height: 1.6;">
                    "The page you're looking for doesn't exist or may have been moved."
                </p>

                <div style="display: flex; justify-content: center; gap: 1rem;">
                    <button
                        on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/", Default::default());
                            }
                        }
                        style="background: #2d3748; color: white; padding: 1rem 1.5rem; border-radius: 12px; border: none; font-size: 1rem; font-weight: 600; cursor: pointer;">
                        "Go Home"
                    </button>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Ok(history) = window.history() {
                                    let _ = history.back();
                                }
                            }
                        }
                        style="background: transparent; color: #2d3748; padding: 1rem 1.5rem; border: 2px solid #2d3748; border-radius: 12px; font-size: 1rem; font-weight: 600; cursor: pointer;">
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
