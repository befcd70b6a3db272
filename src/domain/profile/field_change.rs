//! Single-field profile edits and raw operator input parsing.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::attributes::{
    parse_yes_no, Contract, Gender, InternetService, ParentService, PaymentMethod, ServiceOption,
};
use super::customer_profile::{TENURE_MAX, TENURE_MIN};
use crate::domain::foundation::ValidationError;

/// How raw numeric input that fails to parse is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericInputPolicy {
    /// Reject non-numeric or out-of-domain input with a `ValidationError`.
    #[default]
    Strict,
    /// Fall back to 0 on non-numeric input, then clamp into the field's domain.
    Lenient,
}

/// Internet-dependent add-on services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddOn {
    OnlineSecurity,
    OnlineBackup,
    DeviceProtection,
    TechSupport,
    StreamingTv,
    StreamingMovies,
}

impl AddOn {
    pub const ALL: [AddOn; 6] = [
        AddOn::OnlineSecurity,
        AddOn::OnlineBackup,
        AddOn::DeviceProtection,
        AddOn::TechSupport,
        AddOn::StreamingTv,
        AddOn::StreamingMovies,
    ];

    pub fn field(&self) -> ProfileField {
        match self {
            AddOn::OnlineSecurity => ProfileField::OnlineSecurity,
            AddOn::OnlineBackup => ProfileField::OnlineBackup,
            AddOn::DeviceProtection => ProfileField::DeviceProtection,
            AddOn::TechSupport => ProfileField::TechSupport,
            AddOn::StreamingTv => ProfileField::StreamingTv,
            AddOn::StreamingMovies => ProfileField::StreamingMovies,
        }
    }
}

/// Names of the editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Gender,
    SeniorCitizen,
    Partner,
    Dependents,
    Tenure,
    PhoneService,
    MultipleLines,
    InternetService,
    OnlineSecurity,
    OnlineBackup,
    DeviceProtection,
    TechSupport,
    StreamingTv,
    StreamingMovies,
    Contract,
    PaperlessBilling,
    PaymentMethod,
    MonthlyCharges,
    TotalCharges,
}

impl ProfileField {
    pub const ALL: [ProfileField; 19] = [
        ProfileField::Gender,
        ProfileField::SeniorCitizen,
        ProfileField::Partner,
        ProfileField::Dependents,
        ProfileField::Tenure,
        ProfileField::PhoneService,
        ProfileField::MultipleLines,
        ProfileField::InternetService,
        ProfileField::OnlineSecurity,
        ProfileField::OnlineBackup,
        ProfileField::DeviceProtection,
        ProfileField::TechSupport,
        ProfileField::StreamingTv,
        ProfileField::StreamingMovies,
        ProfileField::Contract,
        ProfileField::PaperlessBilling,
        ProfileField::PaymentMethod,
        ProfileField::MonthlyCharges,
        ProfileField::TotalCharges,
    ];

    /// Wire name used by the scoring service and the operator forms.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::Gender => "gender",
            ProfileField::SeniorCitizen => "seniorcitizen",
            ProfileField::Partner => "partner",
            ProfileField::Dependents => "dependents",
            ProfileField::Tenure => "tenure",
            ProfileField::PhoneService => "phoneservice",
            ProfileField::MultipleLines => "multiplelines",
            ProfileField::InternetService => "internetservice",
            ProfileField::OnlineSecurity => "onlinesecurity",
            ProfileField::OnlineBackup => "onlinebackup",
            ProfileField::DeviceProtection => "deviceprotection",
            ProfileField::TechSupport => "techsupport",
            ProfileField::StreamingTv => "streamingtv",
            ProfileField::StreamingMovies => "streamingmovies",
            ProfileField::Contract => "contract",
            ProfileField::PaperlessBilling => "paperlessbilling",
            ProfileField::PaymentMethod => "paymentmethod",
            ProfileField::MonthlyCharges => "monthlycharges",
            ProfileField::TotalCharges => "totalcharges",
        }
    }

    /// The add-on this field names, if any.
    pub fn add_on(&self) -> Option<AddOn> {
        AddOn::ALL.into_iter().find(|a| a.field() == *self)
    }

    /// The service this field depends on, if it is a tri-state option.
    pub fn parent(&self) -> Option<ParentService> {
        match self {
            ProfileField::MultipleLines => Some(ParentService::Phone),
            other if other.add_on().is_some() => Some(ParentService::Internet),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::invalid_format("field", format!("unknown field '{}'", wanted)))
    }
}

/// One typed change to one profile field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Gender(Gender),
    SeniorCitizen(bool),
    Partner(bool),
    Dependents(bool),
    Tenure(u8),
    PhoneService(bool),
    MultipleLines(ServiceOption),
    InternetService(InternetService),
    AddOn(AddOn, ServiceOption),
    Contract(Contract),
    PaperlessBilling(bool),
    PaymentMethod(PaymentMethod),
    MonthlyCharges(Decimal),
    TotalCharges(Decimal),
}

impl FieldChange {
    /// The field this change targets.
    pub fn field(&self) -> ProfileField {
        match self {
            FieldChange::Gender(_) => ProfileField::Gender,
            FieldChange::SeniorCitizen(_) => ProfileField::SeniorCitizen,
            FieldChange::Partner(_) => ProfileField::Partner,
            FieldChange::Dependents(_) => ProfileField::Dependents,
            FieldChange::Tenure(_) => ProfileField::Tenure,
            FieldChange::PhoneService(_) => ProfileField::PhoneService,
            FieldChange::MultipleLines(_) => ProfileField::MultipleLines,
            FieldChange::InternetService(_) => ProfileField::InternetService,
            FieldChange::AddOn(add_on, _) => add_on.field(),
            FieldChange::Contract(_) => ProfileField::Contract,
            FieldChange::PaperlessBilling(_) => ProfileField::PaperlessBilling,
            FieldChange::PaymentMethod(_) => ProfileField::PaymentMethod,
            FieldChange::MonthlyCharges(_) => ProfileField::MonthlyCharges,
            FieldChange::TotalCharges(_) => ProfileField::TotalCharges,
        }
    }

    /// Parses raw operator input for `field` into a typed change.
    pub fn parse(
        field: ProfileField,
        raw: &str,
        policy: NumericInputPolicy,
    ) -> Result<Self, ValidationError> {
        let name = field.name();
        let change = match field {
            ProfileField::Gender => FieldChange::Gender(raw.parse()?),
            ProfileField::SeniorCitizen => FieldChange::SeniorCitizen(match policy {
                NumericInputPolicy::Strict => parse_yes_no(name, raw)?,
                NumericInputPolicy::Lenient => parse_yes_no(name, raw).unwrap_or(false),
            }),
            ProfileField::Partner => FieldChange::Partner(parse_yes_no(name, raw)?),
            ProfileField::Dependents => FieldChange::Dependents(parse_yes_no(name, raw)?),
            ProfileField::Tenure => FieldChange::Tenure(parse_tenure(raw, policy)?),
            ProfileField::PhoneService => FieldChange::PhoneService(parse_yes_no(name, raw)?),
            ProfileField::MultipleLines => {
                FieldChange::MultipleLines(ServiceOption::parse(name, ParentService::Phone, raw)?)
            }
            ProfileField::InternetService => FieldChange::InternetService(raw.parse()?),
            ProfileField::Contract => FieldChange::Contract(raw.parse()?),
            ProfileField::PaperlessBilling => {
                FieldChange::PaperlessBilling(parse_yes_no(name, raw)?)
            }
            ProfileField::PaymentMethod => FieldChange::PaymentMethod(raw.parse()?),
            ProfileField::MonthlyCharges => {
                FieldChange::MonthlyCharges(parse_amount(name, raw, policy)?)
            }
            ProfileField::TotalCharges => {
                FieldChange::TotalCharges(parse_amount(name, raw, policy)?)
            }
            add_on_field => {
                let add_on = add_on_field
                    .add_on()
                    .ok_or_else(|| ValidationError::invalid_format(name, "not an add-on"))?;
                FieldChange::AddOn(add_on, ServiceOption::parse(name, ParentService::Internet, raw)?)
            }
        };
        Ok(change)
    }
}

fn parse_tenure(raw: &str, policy: NumericInputPolicy) -> Result<u8, ValidationError> {
    let name = ProfileField::Tenure.name();
    let min = i64::from(TENURE_MIN);
    let max = i64::from(TENURE_MAX);

    match policy {
        NumericInputPolicy::Strict => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::empty_field(name));
            }
            let months: i64 = trimmed.parse().map_err(|_| {
                ValidationError::invalid_format(name, format!("'{}' is not a whole number", trimmed))
            })?;
            if !(min..=max).contains(&months) {
                return Err(ValidationError::out_of_range(
                    name,
                    min as i32,
                    max as i32,
                    months.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
                ));
            }
            Ok(months as u8)
        }
        NumericInputPolicy::Lenient => {
            let months = raw.trim().parse::<i64>().unwrap_or(0);
            Ok(months.clamp(min, max) as u8)
        }
    }
}

fn parse_amount(field: &str, raw: &str, policy: NumericInputPolicy) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    match policy {
        NumericInputPolicy::Strict => {
            if trimmed.is_empty() {
                return Err(ValidationError::empty_field(field));
            }
            let amount = Decimal::from_str(trimmed).map_err(|_| {
                ValidationError::invalid_format(field, format!("'{}' is not a number", trimmed))
            })?;
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(ValidationError::negative_amount(field));
            }
            Ok(amount)
        }
        NumericInputPolicy::Lenient => {
            let amount = Decimal::from_str(trimmed).unwrap_or(Decimal::ZERO);
            Ok(amount.max(Decimal::ZERO))
        }
    }
}
