use chrono::NaiveDate;

use super::slots::{format_slot_long, HourFormat, SlotId};

/// Where the visitor is in the booking flow. There is no backward
/// transition; picking a different date restarts slot selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    PickDate,
    PickSlot,
    Confirm,
}

/// Cross-step wizard state, kept separate from rendering so the
/// transition rules can be exercised without a DOM. The view layer
/// wraps one of these in a signal and calls the mutators on events.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    pub selected_date: Option<NaiveDate>,
    pub selected_slot: Option<SlotId>,
    pub hour_format: HourFormat,
    pub timezone: String,
}

impl Default for BookingWizard {
    fn default() -> Self {
        BookingWizard::new()
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        BookingWizard {
            selected_date: None,
            selected_slot: None,
            hour_format: HourFormat::H12,
            timezone: "UTC".to_string(),
        }
    }

    /// Selecting a date always discards the slot, even when the same
    /// date is picked again. A slot is only meaningful for the date it
    /// was chosen under.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.selected_slot = None;
    }

    /// Returns false (and changes nothing) when no date is selected.
    pub fn select_slot(&mut self, slot: SlotId) -> bool {
        if self.selected_date.is_none() {
            return false;
        }
        self.selected_slot = Some(slot);
        true
    }

    /// Display preference only; the current selection is untouched.
    pub fn set_hour_format(&mut self, format: HourFormat) {
        self.hour_format = format;
    }

    pub fn set_timezone(&mut self, tz_abbr: String) {
        self.timezone = tz_abbr;
    }

    pub fn step(&self) -> WizardStep {
        match (&self.selected_date, &self.selected_slot) {
            (None, _) => WizardStep::PickDate,
            (Some(_), None) => WizardStep::PickSlot,
            (Some(_), Some(_)) => WizardStep::Confirm,
        }
    }

    /// "Next" is only offered once a slot has been confirmed.
    pub fn can_advance(&self) -> bool {
        self.step() == WizardStep::Confirm
    }

    /// Long-form description of the confirmed slot, rendered with the
    /// session's hour format and timezone so later wizard steps show
    /// the same clock the visitor picked with.
    pub fn slot_summary(&self) -> Option<String> {
        self.selected_slot
            .as_ref()
            .map(|slot| format_slot_long(slot, self.hour_format, &self.timezone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    fn jan_21() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 21).unwrap()
    }

    #[test]
    fn starts_with_nothing_selected() {
        let wizard = BookingWizard::new();
        assert_eq!(wizard.step(), WizardStep::PickDate);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn selecting_date_then_slot_reaches_terminal_step() {
        let mut wizard = BookingWizard::new();
        wizard.select_date(jan_20());
        assert_eq!(wizard.step(), WizardStep::PickSlot);

        assert!(wizard.select_slot(SlotId::encode(jan_20(), "09:00")));
        assert_eq!(wizard.step(), WizardStep::Confirm);
        assert!(wizard.can_advance());
    }

    #[test]
    fn slot_rejected_before_any_date() {
        let mut wizard = BookingWizard::new();
        assert!(!wizard.select_slot(SlotId::encode(jan_20(), "09:00")));
        assert_eq!(wizard.selected_slot, None);
    }

    #[test]
    fn changing_date_clears_slot() {
        let mut wizard = BookingWizard::new();
        wizard.select_date(jan_20());
        wizard.select_slot(SlotId::encode(jan_20(), "09:00"));

        wizard.select_date(jan_21());
        assert_eq!(wizard.selected_slot, None);
        assert_eq!(wizard.step(), WizardStep::PickSlot);
    }

    #[test]
    fn reselecting_same_date_also_clears_slot() {
        let mut wizard = BookingWizard::new();
        wizard.select_date(jan_20());
        wizard.select_slot(SlotId::encode(jan_20(), "09:00"));

        wizard.select_date(jan_20());
        assert_eq!(wizard.selected_slot, None);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn hour_format_toggle_keeps_selection() {
        let mut wizard = BookingWizard::new();
        wizard.select_date(jan_20());
        let slot = SlotId::encode(jan_20(), "09:00");
        wizard.select_slot(slot.clone());

        wizard.set_hour_format(wizard.hour_format.toggled());
        assert_eq!(wizard.hour_format, HourFormat::H24);
        assert_eq!(wizard.selected_slot, Some(slot));
    }

    #[test]
    fn slot_summary_follows_session_hour_format() {
        let mut wizard = BookingWizard::new();
        wizard.select_date(jan_20());
        wizard.select_slot(SlotId::encode(jan_20(), "14:00"));
        assert_eq!(
            wizard.slot_summary().as_deref(),
            Some("Monday, January 20, 2025 at 2:00 PM")
        );

        wizard.set_hour_format(HourFormat::H24);
        wizard.set_timezone("EST".to_string());
        assert_eq!(
            wizard.slot_summary().as_deref(),
            Some("Monday, January 20, 2025 at 14:00 EST")
        );
    }

    #[test]
    fn no_summary_before_a_slot_is_confirmed() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.slot_summary(), None);
        wizard.select_date(jan_20());
        assert_eq!(wizard.slot_summary(), None);
    }
}
