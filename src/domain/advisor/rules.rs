//! Advisor rules and the fold that evaluates them.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::{InterventionKind, InterventionSuggestion};
use crate::domain::profile::{AddOn, Contract, CustomerProfile, FieldChange, ServiceOption};

/// Monthly charge above which the loyalty discount applies.
pub const LOYALTY_DISCOUNT_THRESHOLD: Decimal = dec!(80);

/// Multiplier applied to monthly charges by the loyalty discount (15% off).
pub const LOYALTY_DISCOUNT_FACTOR: Decimal = dec!(0.85);

/// A rule inspects the accumulated profile and, if it fires, returns the
/// mutated profile together with the suggestion to show.
pub type AdvisorRule = fn(&CustomerProfile) -> Option<(CustomerProfile, InterventionSuggestion)>;

/// Rules in evaluation order.
pub const RULES: [AdvisorRule; 3] = [upgrade_contract, bundle_support, loyalty_discount];

/// The outcome of running every rule once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorPlan {
    pub profile: CustomerProfile,
    pub suggestions: Vec<InterventionSuggestion>,
}

impl AdvisorPlan {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Evaluates every rule against `baseline`, left to right.
///
/// Never fails: a rule whose mutation would be rejected simply does not fire.
pub fn advise(baseline: &CustomerProfile) -> AdvisorPlan {
    RULES.iter().fold(
        AdvisorPlan {
            profile: baseline.clone(),
            suggestions: Vec::new(),
        },
        |mut plan, rule| {
            if let Some((profile, suggestion)) = rule(&plan.profile) {
                plan.profile = profile;
                plan.suggestions.push(suggestion);
            }
            plan
        },
    )
}

fn upgrade_contract(profile: &CustomerProfile) -> Option<(CustomerProfile, InterventionSuggestion)> {
    if profile.contract() != Contract::MonthToMonth {
        return None;
    }
    let upgraded = profile.apply(FieldChange::Contract(Contract::OneYear)).ok()?;
    Some((upgraded, InterventionKind::ContractUpgrade.into()))
}

fn bundle_support(profile: &CustomerProfile) -> Option<(CustomerProfile, InterventionSuggestion)> {
    if profile.tech_support() != ServiceOption::No && profile.online_security() != ServiceOption::No {
        return None;
    }
    let bundled = profile
        .apply_all([
            FieldChange::AddOn(AddOn::TechSupport, ServiceOption::Yes),
            FieldChange::AddOn(AddOn::OnlineSecurity, ServiceOption::Yes),
        ])
        .ok()?;
    Some((bundled, InterventionKind::BundleSupport.into()))
}

fn loyalty_discount(profile: &CustomerProfile) -> Option<(CustomerProfile, InterventionSuggestion)> {
    if profile.monthly_charges() <= LOYALTY_DISCOUNT_THRESHOLD {
        return None;
    }
    let discounted = (profile.monthly_charges() * LOYALTY_DISCOUNT_FACTOR)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let profile = profile.apply(FieldChange::MonthlyCharges(discounted)).ok()?;
    Some((profile, InterventionKind::LoyaltyDiscount.into()))
}
