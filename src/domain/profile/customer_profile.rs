//! The canonical customer-attribute record.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::attributes::{Contract, Gender, InternetService, ParentService, PaymentMethod, ServiceOption};
use super::field_change::{AddOn, FieldChange};
use crate::domain::foundation::ValidationError;

/// Shortest tenure, in months, a profile may carry.
pub const TENURE_MIN: u8 = 1;

/// Longest tenure, in months, a profile may carry.
pub const TENURE_MAX: u8 = 72;

/// A customer profile as collected by the wizard and scored by the model.
///
/// Profiles are values: [`CustomerProfile::apply`] returns a new profile and
/// leaves the receiver untouched, so an assessment can keep referring to the
/// exact profile that produced it.
///
/// Tri-state add-ons are kept consistent with their parent service. Switching
/// the internet service to `None` marks every internet add-on `NotApplicable`;
/// switching back turns them into `No`. Phone service and multiple lines follow
/// the same rule. `total_charges` is independent of `monthly_charges` and
/// `tenure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    gender: Gender,
    senior_citizen: bool,
    has_partner: bool,
    has_dependents: bool,
    tenure: u8,
    phone_service: bool,
    multiple_lines: ServiceOption,
    internet_service: InternetService,
    online_security: ServiceOption,
    online_backup: ServiceOption,
    device_protection: ServiceOption,
    tech_support: ServiceOption,
    streaming_tv: ServiceOption,
    streaming_movies: ServiceOption,
    contract: Contract,
    paperless_billing: bool,
    payment_method: PaymentMethod,
    monthly_charges: Decimal,
    total_charges: Decimal,
}

impl Default for CustomerProfile {
    /// The wizard's starting point: a one-year fiber customer on a
    /// month-to-month contract with no phone line and no add-ons.
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            senior_citizen: false,
            has_partner: false,
            has_dependents: false,
            tenure: 12,
            phone_service: false,
            multiple_lines: ServiceOption::NotApplicable,
            internet_service: InternetService::FiberOptic,
            online_security: ServiceOption::No,
            online_backup: ServiceOption::No,
            device_protection: ServiceOption::No,
            tech_support: ServiceOption::No,
            streaming_tv: ServiceOption::No,
            streaming_movies: ServiceOption::No,
            contract: Contract::MonthToMonth,
            paperless_billing: true,
            payment_method: PaymentMethod::ElectronicCheck,
            monthly_charges: dec!(70.00),
            total_charges: dec!(840.00),
        }
    }
}

impl CustomerProfile {
    /// Returns a new profile with `change` applied.
    pub fn apply(&self, change: FieldChange) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        match change {
            FieldChange::Gender(gender) => next.gender = gender,
            FieldChange::SeniorCitizen(value) => next.senior_citizen = value,
            FieldChange::Partner(value) => next.has_partner = value,
            FieldChange::Dependents(value) => next.has_dependents = value,
            FieldChange::Tenure(months) => {
                if !(TENURE_MIN..=TENURE_MAX).contains(&months) {
                    return Err(ValidationError::out_of_range(
                        "tenure",
                        i32::from(TENURE_MIN),
                        i32::from(TENURE_MAX),
                        i32::from(months),
                    ));
                }
                next.tenure = months;
            }
            FieldChange::PhoneService(enabled) => {
                next.phone_service = enabled;
                next.multiple_lines = derive_option(enabled, self.multiple_lines);
            }
            FieldChange::MultipleLines(option) => {
                check_consistent("multiplelines", ParentService::Phone, self.phone_service, option)?;
                next.multiple_lines = option;
            }
            FieldChange::InternetService(service) => {
                next.internet_service = service;
                for add_on in AddOn::ALL {
                    let derived = derive_option(service.is_active(), self.add_on(add_on));
                    next.set_add_on(add_on, derived);
                }
            }
            FieldChange::AddOn(add_on, option) => {
                check_consistent(
                    add_on.field().name(),
                    ParentService::Internet,
                    self.internet_service.is_active(),
                    option,
                )?;
                next.set_add_on(add_on, option);
            }
            FieldChange::Contract(contract) => next.contract = contract,
            FieldChange::PaperlessBilling(value) => next.paperless_billing = value,
            FieldChange::PaymentMethod(method) => next.payment_method = method,
            FieldChange::MonthlyCharges(amount) => {
                next.monthly_charges = non_negative("monthlycharges", amount)?;
            }
            FieldChange::TotalCharges(amount) => {
                next.total_charges = non_negative("totalcharges", amount)?;
            }
        }
        Ok(next)
    }

    /// Applies changes left to right, stopping at the first invalid one.
    pub fn apply_all<I>(&self, changes: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = FieldChange>,
    {
        changes
            .into_iter()
            .try_fold(self.clone(), |profile, change| profile.apply(change))
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn senior_citizen(&self) -> bool {
        self.senior_citizen
    }

    pub fn has_partner(&self) -> bool {
        self.has_partner
    }

    pub fn has_dependents(&self) -> bool {
        self.has_dependents
    }

    /// Months as a customer, within [`TENURE_MIN`, `TENURE_MAX`].
    pub fn tenure(&self) -> u8 {
        self.tenure
    }

    pub fn phone_service(&self) -> bool {
        self.phone_service
    }

    pub fn multiple_lines(&self) -> ServiceOption {
        self.multiple_lines
    }

    pub fn internet_service(&self) -> InternetService {
        self.internet_service
    }

    /// Current value of an internet add-on.
    pub fn add_on(&self, add_on: AddOn) -> ServiceOption {
        match add_on {
            AddOn::OnlineSecurity => self.online_security,
            AddOn::OnlineBackup => self.online_backup,
            AddOn::DeviceProtection => self.device_protection,
            AddOn::TechSupport => self.tech_support,
            AddOn::StreamingTv => self.streaming_tv,
            AddOn::StreamingMovies => self.streaming_movies,
        }
    }

    pub fn online_security(&self) -> ServiceOption {
        self.online_security
    }

    pub fn tech_support(&self) -> ServiceOption {
        self.tech_support
    }

    pub fn contract(&self) -> Contract {
        self.contract
    }

    pub fn paperless_billing(&self) -> bool {
        self.paperless_billing
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn monthly_charges(&self) -> Decimal {
        self.monthly_charges
    }

    pub fn total_charges(&self) -> Decimal {
        self.total_charges
    }

    fn set_add_on(&mut self, add_on: AddOn, option: ServiceOption) {
        let slot = match add_on {
            AddOn::OnlineSecurity => &mut self.online_security,
            AddOn::OnlineBackup => &mut self.online_backup,
            AddOn::DeviceProtection => &mut self.device_protection,
            AddOn::TechSupport => &mut self.tech_support,
            AddOn::StreamingTv => &mut self.streaming_tv,
            AddOn::StreamingMovies => &mut self.streaming_movies,
        };
        *slot = option;
    }
}

/// Re-derives a tri-state option after its parent service changed.
fn derive_option(parent_active: bool, current: ServiceOption) -> ServiceOption {
    match (parent_active, current) {
        (false, _) => ServiceOption::NotApplicable,
        (true, ServiceOption::NotApplicable) => ServiceOption::No,
        (true, option) => option,
    }
}

fn check_consistent(
    field: &str,
    parent: ParentService,
    parent_active: bool,
    option: ServiceOption,
) -> Result<(), ValidationError> {
    match (parent_active, option.is_applicable()) {
        (true, false) => Err(ValidationError::inconsistent_service(
            field,
            parent.field_name(),
            "option must be Yes or No while the service is active",
        )),
        (false, true) => Err(ValidationError::inconsistent_service(
            field,
            parent.field_name(),
            "option is not applicable without the service",
        )),
        _ => Ok(()),
    }
}

fn non_negative(field: &str, amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::negative_amount(field));
    }
    Ok(amount)
}
