pub mod schedule;
pub mod slots;
pub mod state;

// Re-export commonly used types
pub use slots::{HourFormat, SlotId};
pub use state::{BookingWizard, WizardStep};
