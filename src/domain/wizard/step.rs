//! Wizard steps.

use serde::Serialize;

/// One page of the three-step profile wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Demographics: gender, senior citizen, partner, dependents.
    #[default]
    Profile,
    /// Tenure, phone and internet services.
    Services,
    /// Contract, charges, billing and payment.
    Billing,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Profile;
    pub const LAST: WizardStep = WizardStep::Billing;

    /// 1-based position, as shown in "Step N of 3".
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Profile => 1,
            WizardStep::Services => 2,
            WizardStep::Billing => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Profile => "Customer Profile",
            WizardStep::Services => "Services",
            WizardStep::Billing => "Billing",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Profile => Some(WizardStep::Services),
            WizardStep::Services => Some(WizardStep::Billing),
            WizardStep::Billing => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Profile => None,
            WizardStep::Services => Some(WizardStep::Profile),
            WizardStep::Billing => Some(WizardStep::Services),
        }
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_one_to_three() {
        assert_eq!(WizardStep::Profile.number(), 1);
        assert_eq!(WizardStep::Services.number(), 2);
        assert_eq!(WizardStep::Billing.number(), 3);
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        assert_eq!(WizardStep::Billing.next(), None);
        assert_eq!(WizardStep::Profile.previous(), None);
        assert_eq!(WizardStep::Profile.next(), Some(WizardStep::Services));
        assert_eq!(WizardStep::Billing.previous(), Some(WizardStep::Services));
    }

    #[test]
    fn default_is_first_step() {
        assert_eq!(WizardStep::default(), WizardStep::FIRST);
    }
}
