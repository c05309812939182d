pub mod availability_calendar;
pub mod date_slot_picker;
pub mod error;
pub mod loading;
pub mod time_slot_panel;

// Re-export commonly used types
pub use availability_calendar::AvailabilityCalendar;
pub use date_slot_picker::DateSlotPicker;
pub use error::ErrorView;
pub use loading::LoadingView;
pub use time_slot_panel::TimeSlotPanel;
