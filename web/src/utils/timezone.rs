/// Timezone utility for labelling slot times with the viewer's zone
use leptos::prelude::*;

use crate::booking::slots::{format_start_time_in_zone, HourFormat};

/// Get timezone abbreviation - returns a signal that updates when client-side hydration completes
pub fn get_timezone_abbreviation() -> ReadSignal<String> {
    // Create a signal that starts with a default and updates client-side
    let (timezone, set_timezone) = signal("UTC".to_string());

    // Effect that only runs on the client side
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::prelude::*;

            #[wasm_bindgen]
            extern "C" {
                #[wasm_bindgen(js_name = eval)]
                fn js_eval(code: &str) -> JsValue;
            }

            // Try to get the actual timezone from Intl API
            if let Ok(timezone_result) = std::panic::catch_unwind(|| {
                js_eval("Intl.DateTimeFormat().resolvedOptions().timeZone")
            }) {
                if let Some(timezone_name) = timezone_result.as_string() {
                    set_timezone.set(timezone_name_to_abbreviation(&timezone_name));
                    return;
                }
            }

            // Fallback: get timezone offset and convert to abbreviation
            if let Ok(offset_result) =
                std::panic::catch_unwind(|| js_eval("new Date().getTimezoneOffset()"))
            {
                if let Some(offset_minutes) = offset_result.as_f64() {
                    let offset_hours = (-offset_minutes / 60.0) as i32;
                    set_timezone.set(offset_to_timezone_abbr(offset_hours));
                }
            }
        }
    });

    timezone
}

/// Convert timezone name to common abbreviation
#[cfg(feature = "hydrate")]
fn timezone_name_to_abbreviation(tz_name: &str) -> String {
    match tz_name {
        "America/New_York" => "EST".to_string(),
        "America/Chicago" => "CST".to_string(),
        "America/Denver" => "MST".to_string(),
        "America/Los_Angeles" => "PST".to_string(),
        "America/Phoenix" => "MST".to_string(),
        "Europe/London" => "GMT".to_string(),
        "Europe/Paris" | "Europe/Berlin" | "Europe/Rome" => "CET".to_string(),
        "Asia/Tokyo" => "JST".to_string(),
        "Asia/Shanghai" => "CST".to_string(),
        "Australia/Sydney" => "AEDT".to_string(),
        _ => {
            // Extract common abbreviation patterns
            if let Some(last_part) = tz_name.split('/').last() {
                last_part.to_uppercase()
            } else {
                "Local".to_string()
            }
        }
    }
}

/// Convert UTC offset to timezone abbreviation
#[cfg(feature = "hydrate")]
fn offset_to_timezone_abbr(offset_hours: i32) -> String {
    match offset_hours {
        -12 => "BIT".to_string(),
        -11 => "SST".to_string(),
        -10 => "HST".to_string(),
        -9 => "AKST".to_string(),
        -8 => "PST".to_string(),
        -7 => "MST".to_string(),
        -6 => "CST".to_string(),
        -5 => "EST".to_string(),
        -4 => "AST".to_string(),
        0 => "UTC".to_string(),
        1 => "CET".to_string(),
        2 => "EET".to_string(),
        9 => "JST".to_string(),
        _ => format!("UTC{:+}", offset_hours),
    }
}

/// Format a slot start time with the viewer's timezone indicator
pub fn format_time_with_timezone(
    time: &str,
    format: HourFormat,
    timezone_signal: ReadSignal<String>,
) -> String {
    format_start_time_in_zone(time, format, &timezone_signal.get())
}
