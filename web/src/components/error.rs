use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Inline error surface for failed availability/event fetches. No
/// retry controls; the visitor can reload or pick another date.
#[component]
pub fn ErrorView(#[prop(optional_no_strip)] message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| {
                "Something went wrong loading availability. Please try again.".to_string()
            })}
        </MessageBar>
    }
}
