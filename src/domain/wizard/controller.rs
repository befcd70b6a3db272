//! Wizard controller - step-by-step profile collection.

use thiserror::Error;

use super::WizardStep;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::profile::{CustomerProfile, FieldChange, NumericInputPolicy, ProfileField};

/// Submission attempted before the billing step was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Wizard incomplete: submission requires step {required}, currently on step {current}")]
pub struct WizardIncomplete {
    pub current: u8,
    pub required: u8,
}

impl WizardIncomplete {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::WizardIncomplete
    }
}

/// Drives the three-step profile wizard.
///
/// Every field has a default, so no step blocks navigation. Submission is only
/// possible from the billing step; a failed submission keeps the wizard on that
/// step with all collected data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardController {
    step: WizardStep,
    profile: CustomerProfile,
    submission_error: Option<String>,
}

impl WizardController {
    /// Fresh wizard: first step, default profile, no error.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn profile(&self) -> &CustomerProfile {
        &self.profile
    }

    /// Moves to the next step. Returns false (and does nothing) on the last step.
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Moves to the previous step. Returns false (and does nothing) on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Applies a typed edit. The profile is unchanged if the edit is invalid.
    pub fn update(&mut self, change: FieldChange) -> Result<(), ValidationError> {
        self.profile = self.profile.apply(change)?;
        Ok(())
    }

    /// Parses and applies raw form input.
    pub fn update_raw(
        &mut self,
        field: ProfileField,
        raw: &str,
        policy: NumericInputPolicy,
    ) -> Result<(), ValidationError> {
        let change = FieldChange::parse(field, raw, policy)?;
        self.update(change)
    }

    pub fn can_submit(&self) -> bool {
        self.step.is_last()
    }

    /// The profile to score. Only available on the billing step.
    pub fn submission_profile(&self) -> Result<&CustomerProfile, WizardIncomplete> {
        if !self.can_submit() {
            return Err(WizardIncomplete {
                current: self.step.number(),
                required: WizardStep::LAST.number(),
            });
        }
        Ok(&self.profile)
    }

    /// Records why the last submission failed. Step and profile are kept.
    pub fn record_submission_failure(&mut self, message: impl Into<String>) {
        self.submission_error = Some(message.into());
    }

    pub fn clear_submission_error(&mut self) {
        self.submission_error = None;
    }

    /// Message from the most recent failed submission, if any.
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    /// Hands the collected profile over, consuming the wizard.
    pub fn into_profile(self) -> CustomerProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Contract;

    mod navigation {
        use super::*;

        #[test]
        fn starts_on_profile_step_with_defaults() {
            let wizard = WizardController::new();
            assert_eq!(wizard.step(), WizardStep::Profile);
            assert_eq!(wizard.profile(), &CustomerProfile::default());
            assert!(wizard.submission_error().is_none());
        }

        #[test]
        fn advance_on_last_step_is_noop() {
            let mut wizard = WizardController::new();
            assert!(wizard.advance());
            assert!(wizard.advance());
            assert!(!wizard.advance());
            assert_eq!(wizard.step(), WizardStep::Billing);
        }

        #[test]
        fn retreat_on_first_step_is_noop() {
            let mut wizard = WizardController::new();
            assert!(!wizard.retreat());
            assert_eq!(wizard.step(), WizardStep::Profile);
        }

        #[test]
        fn exactly_three_steps_are_reachable() {
            let mut wizard = WizardController::new();
            let mut seen = vec![wizard.step()];
            while wizard.advance() {
                seen.push(wizard.step());
            }
            while wizard.retreat() {
                seen.push(wizard.step());
            }
            seen.sort();
            seen.dedup();
            assert_eq!(
                seen,
                vec![WizardStep::Profile, WizardStep::Services, WizardStep::Billing]
            );
        }

        #[test]
        fn only_billing_step_can_submit() {
            let mut wizard = WizardController::new();
            assert!(!wizard.can_submit());
            wizard.advance();
            assert!(!wizard.can_submit());
            wizard.advance();
            assert!(wizard.can_submit());
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn edits_survive_navigation() {
            let mut wizard = WizardController::new();
            wizard.update(FieldChange::Contract(Contract::TwoYear)).unwrap();
            wizard.advance();
            wizard.retreat();
            assert_eq!(wizard.profile().contract(), Contract::TwoYear);
        }

        #[test]
        fn invalid_raw_input_keeps_previous_value() {
            let mut wizard = WizardController::new();
            let result = wizard.update_raw(ProfileField::Tenure, "lots", NumericInputPolicy::Strict);
            assert!(result.is_err());
            assert_eq!(wizard.profile().tenure(), 12);
        }

        #[test]
        fn lenient_raw_input_coerces() {
            let mut wizard = WizardController::new();
            wizard
                .update_raw(ProfileField::Tenure, "lots", NumericInputPolicy::Lenient)
                .unwrap();
            assert_eq!(wizard.profile().tenure(), 1);
        }
    }

    #[test]
    fn submission_profile_requires_billing_step() {
        let mut wizard = WizardController::new();
        wizard.advance();
        let err = wizard.submission_profile().unwrap_err();
        assert_eq!(err.current, 2);
        assert_eq!(err.required, 3);
        assert_eq!(err.code(), ErrorCode::WizardIncomplete);

        wizard.advance();
        assert_eq!(wizard.submission_profile().unwrap(), &CustomerProfile::default());
    }

    #[test]
    fn submission_failure_keeps_step_and_data() {
        let mut wizard = WizardController::new();
        wizard.advance();
        wizard.advance();
        wizard.update(FieldChange::Tenure(40)).unwrap();

        wizard.record_submission_failure("service unavailable");

        assert_eq!(wizard.step(), WizardStep::Billing);
        assert_eq!(wizard.profile().tenure(), 40);
        assert_eq!(wizard.submission_error(), Some("service unavailable"));

        wizard.clear_submission_error();
        assert!(wizard.submission_error().is_none());
    }
}
