//! Enumerated customer attributes.
//!
//! Every enum carries the label the scoring service and the operator forms use
//! ("Fiber optic", "Month-to-month", ...). Parsing is case-insensitive and
//! ignores surrounding whitespace.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Finds the variant whose label matches `raw`.
fn parse_label<T: Copy>(
    variants: &[T],
    label: fn(&T) -> &'static str,
    field: &str,
    raw: &str,
) -> Result<T, ValidationError> {
    let wanted = raw.trim();
    variants
        .iter()
        .copied()
        .find(|v| label(v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            let expected: Vec<&str> = variants.iter().map(label).collect();
            ValidationError::invalid_format(
                field,
                format!("'{}' is not one of: {}", wanted, expected.join(", ")),
            )
        })
}

/// Parses a yes/no answer. Accepts `Yes`/`No`, `1`/`0` and `true`/`false`.
pub fn parse_yes_no(field: &str, raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "1" | "true" => Ok(true),
        "no" | "0" | "false" => Ok(false),
        "" => Err(ValidationError::empty_field(field)),
        other => Err(ValidationError::invalid_format(
            field,
            format!("expected Yes or No, got '{}'", other),
        )),
    }
}

/// Label used for a yes/no answer.
pub fn yes_no_label(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "gender", s)
    }
}

/// Type of internet service; exactly one per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InternetService {
    Dsl,
    FiberOptic,
    None,
}

impl InternetService {
    pub const ALL: [InternetService; 3] = [
        InternetService::Dsl,
        InternetService::FiberOptic,
        InternetService::None,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InternetService::Dsl => "DSL",
            InternetService::FiberOptic => "Fiber optic",
            InternetService::None => "No",
        }
    }

    /// Returns true if the customer has any internet service.
    pub fn is_active(&self) -> bool {
        !matches!(self, InternetService::None)
    }
}

impl FromStr for InternetService {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "internetservice", s)
    }
}

/// The service an optional add-on depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentService {
    Phone,
    Internet,
}

impl ParentService {
    /// Wire name of the field that controls this parent service.
    pub fn field_name(&self) -> &'static str {
        match self {
            ParentService::Phone => "phoneservice",
            ParentService::Internet => "internetservice",
        }
    }

    fn not_applicable_label(&self) -> &'static str {
        match self {
            ParentService::Phone => "No phone service",
            ParentService::Internet => "No internet service",
        }
    }
}

/// Tri-state add-on. `NotApplicable` only when the parent service is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceOption {
    Yes,
    No,
    NotApplicable,
}

impl ServiceOption {
    /// Label for this option under the given parent service.
    pub fn label(&self, parent: ParentService) -> &'static str {
        match self {
            ServiceOption::Yes => "Yes",
            ServiceOption::No => "No",
            ServiceOption::NotApplicable => parent.not_applicable_label(),
        }
    }

    /// Parses an option label. Only the given parent's not-applicable label
    /// maps to `NotApplicable`.
    pub fn parse(field: &str, parent: ParentService, raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(parent.not_applicable_label()) {
            return Ok(ServiceOption::NotApplicable);
        }
        parse_yes_no(field, trimmed).map(ServiceOption::from)
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, ServiceOption::NotApplicable)
    }
}

impl From<bool> for ServiceOption {
    fn from(value: bool) -> Self {
        if value {
            ServiceOption::Yes
        } else {
            ServiceOption::No
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Contract {
    MonthToMonth,
    OneYear,
    TwoYear,
}

impl Contract {
    pub const ALL: [Contract; 3] = [Contract::MonthToMonth, Contract::OneYear, Contract::TwoYear];

    pub fn label(&self) -> &'static str {
        match self {
            Contract::MonthToMonth => "Month-to-month",
            Contract::OneYear => "One year",
            Contract::TwoYear => "Two year",
        }
    }
}

impl FromStr for Contract {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "contract", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    ElectronicCheck,
    MailedCheck,
    BankTransferAutomatic,
    CreditCardAutomatic,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::ElectronicCheck,
        PaymentMethod::MailedCheck,
        PaymentMethod::BankTransferAutomatic,
        PaymentMethod::CreditCardAutomatic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::ElectronicCheck => "Electronic check",
            PaymentMethod::MailedCheck => "Mailed check",
            PaymentMethod::BankTransferAutomatic => "Bank transfer (automatic)",
            PaymentMethod::CreditCardAutomatic => "Credit card (automatic)",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "paymentmethod", s)
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_via_label!(Gender, InternetService, Contract, PaymentMethod);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for contract in Contract::ALL {
            assert_eq!(contract.label().parse::<Contract>().unwrap(), contract);
        }
        for method in PaymentMethod::ALL {
            assert_eq!(method.label().parse::<PaymentMethod>().unwrap(), method);
        }
        for service in InternetService::ALL {
            assert_eq!(service.label().parse::<InternetService>().unwrap(), service);
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(" fiber OPTIC ".parse::<InternetService>().unwrap(), InternetService::FiberOptic);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn unknown_label_lists_expected_values() {
        let err = "Three year".parse::<Contract>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("contract"));
        assert!(msg.contains("Month-to-month, One year, Two year"));
    }

    #[test]
    fn yes_no_accepts_numeric_and_boolean_forms() {
        assert!(parse_yes_no("partner", "Yes").unwrap());
        assert!(parse_yes_no("seniorcitizen", "1").unwrap());
        assert!(!parse_yes_no("partner", "false").unwrap());
        assert!(matches!(
            parse_yes_no("partner", "  "),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(parse_yes_no("partner", "maybe").is_err());
    }

    #[test]
    fn service_option_labels_depend_on_parent() {
        assert_eq!(
            ServiceOption::NotApplicable.label(ParentService::Internet),
            "No internet service"
        );
        assert_eq!(
            ServiceOption::NotApplicable.label(ParentService::Phone),
            "No phone service"
        );
        assert_eq!(ServiceOption::Yes.label(ParentService::Phone), "Yes");
    }

    #[test]
    fn service_option_parses_not_applicable_labels() {
        assert_eq!(
            ServiceOption::parse("techsupport", ParentService::Internet, "No internet service").unwrap(),
            ServiceOption::NotApplicable
        );
        assert_eq!(
            ServiceOption::parse("multiplelines", ParentService::Phone, "No phone service").unwrap(),
            ServiceOption::NotApplicable
        );
        assert_eq!(
            ServiceOption::parse("techsupport", ParentService::Internet, "No").unwrap(),
            ServiceOption::No
        );
    }

    #[test]
    fn service_option_rejects_other_parents_label() {
        assert!(ServiceOption::parse("techsupport", ParentService::Internet, "No phone service").is_err());
        assert!(ServiceOption::parse("multiplelines", ParentService::Phone, "No internet service").is_err());
    }

    #[test]
    fn internet_none_is_inactive() {
        assert!(!InternetService::None.is_active());
        assert!(InternetService::Dsl.is_active());
    }
}
